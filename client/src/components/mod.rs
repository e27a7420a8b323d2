//! Reusable UI components shared by the dashboard pages.

pub mod cost_chart;
pub mod nav_bar;
pub mod team_select;
