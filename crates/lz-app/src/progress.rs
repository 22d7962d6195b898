#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    SettingUpCanvas,
    Integrating,
    Completed,
}

impl RunStage {
    pub fn label(&self) -> &'static str {
        match self {
            RunStage::SettingUpCanvas => "setup",
            RunStage::Integrating => "integrating",
            RunStage::Completed => "done",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunProgressEvent {
    pub stage: RunStage,
    pub step: u64,
    pub total_steps: u64,
    pub elapsed_wall_s: f64,
}

impl RunProgressEvent {
    pub fn fraction_complete(&self) -> f64 {
        if self.total_steps == 0 {
            1.0
        } else {
            self.step as f64 / self.total_steps as f64
        }
    }
}
