#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Output reduction level.
    ///
    /// 0 prints everything, 1 drops headers and banners,
    /// 2 keeps only the resolved address or the failure line.
    pub quiet: u8,
    /// Skips the startup banner without touching other output.
    pub no_banner: bool,
}
