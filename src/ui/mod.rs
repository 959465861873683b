pub mod detail_popup;
pub mod graph_panel;
