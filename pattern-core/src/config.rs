#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub side_length: f32,
    pub max_live: usize,
    pub fast_fade_at: usize,
    pub fade_delay_ms: f64,
    pub fast_fade_delay_ms: f64,
    pub fade_step: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            side_length: 40.0,
            max_live: 10,
            fast_fade_at: 9,
            fade_delay_ms: 20_000.0,
            fast_fade_delay_ms: 5_000.0,
            fade_step: 0.01,
        }
    }
}
