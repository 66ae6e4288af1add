pub mod highgui_presenter;
