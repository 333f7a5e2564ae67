pub mod adhoc_input;
pub mod confetti_canvas;
pub mod help_modal;
pub mod team_list;
pub mod winner_modal;

pub use adhoc_input::AdHocInput;
pub use confetti_canvas::ConfettiCanvas;
pub use help_modal::HelpModal;
pub use team_list::TeamList;
pub use winner_modal::WinnerModal;
