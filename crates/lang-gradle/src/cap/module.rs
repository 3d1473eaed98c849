use super::task::TaskView;
use crate::model::ProjectDump;
use buildscope_plugin::{ModuleScope, SourceSetHandle, TaskHandle};

/// A dumped Gradle project seen as a module.
pub struct ProjectScope<'a> {
    project: &'a ProjectDump,
    tasks: Vec<TaskView<'a>>,
}

impl<'a> ProjectScope<'a> {
    pub fn new(project: &'a ProjectDump) -> Self {
        let tasks = project
            .tasks
            .iter()
            .map(|(name, task)| TaskView::new(name, task))
            .collect();
        Self { project, tasks }
    }
}

impl ModuleScope for ProjectScope<'_> {
    fn find_task(&self, name: &str) -> Option<&dyn TaskHandle> {
        self.tasks
            .iter()
            .find(|task| task.name() == name)
            .map(|task| task as &dyn TaskHandle)
    }

    fn source_sets(&self) -> Option<Vec<&dyn SourceSetHandle>> {
        self.project.source_sets.as_ref().map(|sets| {
            sets.iter()
                .map(|set| set as &dyn SourceSetHandle)
                .collect()
        })
    }
}
