pub mod input_panel;
pub mod right_sidebar;
pub mod steps_view;

pub use input_panel::InputPanelState;
pub use right_sidebar::RightSideBarState;
pub use steps_view::StepsViewState;
