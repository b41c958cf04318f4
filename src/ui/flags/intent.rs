use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagId {
    LoggedIn,
    DarkMode,
    ModalVisible,
    BoxVisible,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagIntent {
    Flip(FlagId),
    Set(FlagId, bool),
}

impl Intent for FlagIntent {}
