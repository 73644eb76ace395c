pub mod accuracy_chart;
pub mod address_input;
pub mod alerts_panel;
pub mod footer;
pub mod header;
pub mod map_panel;
pub mod model_table;
pub mod navigation_panel;
pub mod prediction_result;
pub mod route_card;
pub mod route_dashboard;
pub mod route_list;
pub mod slider;
pub mod tab_bar;
