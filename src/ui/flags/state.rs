use crate::ui::mvi::UiState;

use super::flag::Flag;
use super::intent::FlagId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagsState {
    pub logged_in: Flag,
    pub dark_mode: Flag,
    pub modal_visible: Flag,
    pub box_visible: Flag,
    pub custom: Flag,
}

impl Default for FlagsState {
    fn default() -> Self {
        Self {
            logged_in: Flag::new(true),
            dark_mode: Flag::new(false),
            modal_visible: Flag::new(false),
            box_visible: Flag::new(false),
            custom: Flag::new(false),
        }
    }
}

impl UiState for FlagsState {}

impl FlagsState {
    pub fn get(&self, id: FlagId) -> bool {
        match id {
            FlagId::LoggedIn => self.logged_in.get(),
            FlagId::DarkMode => self.dark_mode.get(),
            FlagId::ModalVisible => self.modal_visible.get(),
            FlagId::BoxVisible => self.box_visible.get(),
            FlagId::Custom => self.custom.get(),
        }
    }

    pub(super) fn flag_mut(&mut self, id: FlagId) -> &mut Flag {
        match id {
            FlagId::LoggedIn => &mut self.logged_in,
            FlagId::DarkMode => &mut self.dark_mode,
            FlagId::ModalVisible => &mut self.modal_visible,
            FlagId::BoxVisible => &mut self.box_visible,
            FlagId::Custom => &mut self.custom,
        }
    }
}
