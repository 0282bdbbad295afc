#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PlaybackState {
    Playing, // Timer running, slides auto-advance
    Paused,  // Timer dropped, only manual navigation
}

impl PlaybackState {
    pub fn toggled(self) -> Self {
        match self {
            PlaybackState::Playing => PlaybackState::Paused,
            PlaybackState::Paused => PlaybackState::Playing,
        }
    }
}
