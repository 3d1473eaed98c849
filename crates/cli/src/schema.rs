use buildscope_api::WorkspaceSnapshot;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let schema = schemars::schema_for!(WorkspaceSnapshot);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
