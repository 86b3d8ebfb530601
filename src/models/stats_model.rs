//! models/stats_model.rs

use serde::Serialize;

/// Agregado del dashboard, recalculado en cada GET /api/stats.
/// `open_rate` y `click_rate` quedan fijos en 0: el tracking de aperturas y
/// clicks todavía no está integrado y el panel original tampoco lo calcula.
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub total_emails: usize,
    pub sent_today: usize,
    pub open_rate: u32,
    pub click_rate: u32,
}
