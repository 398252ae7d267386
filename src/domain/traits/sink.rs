/// Sink trait - where a room's human-readable output lines go
pub trait Sink: Send + Sync {
    /// Emit a single line of output
    fn emit(&self, line: &str);
}
