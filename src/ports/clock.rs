/// Port for accessing wall-clock time
pub trait ClockPort: Send + Sync {
    /// Returns milliseconds since the Unix epoch
    fn now(&self) -> f64;

    /// Checks if a time source is available
    fn is_available(&self) -> bool;
}
