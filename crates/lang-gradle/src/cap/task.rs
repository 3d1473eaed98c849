use crate::model::TaskDump;
use crate::shape::TaskProperties;
use buildscope_plugin::{PropertyHolder, TaskHandle};
use std::path::PathBuf;

pub struct TaskView<'a> {
    name: &'a str,
    dump: &'a TaskDump,
    properties: TaskProperties<'a>,
}

impl<'a> TaskView<'a> {
    pub fn new(name: &'a str, dump: &'a TaskDump) -> Self {
        Self {
            name,
            dump,
            properties: TaskProperties::new(&dump.properties),
        }
    }
}

impl TaskHandle for TaskView<'_> {
    fn name(&self) -> &str {
        self.name
    }

    fn properties(&self) -> &dyn PropertyHolder {
        &self.properties
    }

    fn produces_archive(&self) -> bool {
        self.dump.archive
    }

    fn output_files(&self) -> Vec<PathBuf> {
        self.dump.outputs.clone()
    }
}
