use buildscope_api::{HierarchicalElement, ModuleId, ModuleModel, ancestors};

/// Computes the hierarchy-qualified id of a module.
///
/// A module named like its owning project is that project's root module and
/// keeps its bare name. Any other module is prefixed with every enclosing
/// container, outermost first: `outer.inner.name`.
pub fn resolve_module_id(module: &ModuleModel) -> ModuleId {
    qualified_name(module, &module.project_name)
}

pub fn qualified_name(element: &dyn HierarchicalElement, project_name: &str) -> ModuleId {
    let name = element.name();
    if name == project_name {
        return ModuleId::new(name);
    }

    let mut segments: Vec<&str> = ancestors(element).map(|a| a.name()).collect();
    segments.reverse();
    segments.push(name);
    ModuleId::new(segments.join("."))
}
