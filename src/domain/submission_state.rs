/// 联系表单所处的阶段，同一时刻只有一个
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Submitted,
}

impl SubmissionState {
    pub fn as_str(&self) -> &str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Success => "success",
            SubmissionState::Submitted => "submitted",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, SubmissionState::Idle)
    }

    /// 提交按钮在发送中与发送成功两个阶段不可用
    pub fn locks_submit(&self) -> bool {
        matches!(self, SubmissionState::Submitting | SubmissionState::Success)
    }
}
