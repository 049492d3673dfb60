/// Time a block and report it at `info` level.
/// ```
/// # use circle_fractal::profile;
/// let n = profile!("sum", (0..1000u64).sum::<u64>());
/// assert_eq!(n, 499500);
/// ```
#[macro_export]
macro_rules! profile(
  ($title: expr, $expr: expr) => {{
    let t0 = std::time::Instant::now();
    let ret = $expr;
    $crate::tracing::info!("{} profile: {}ms", $title, t0.elapsed().as_millis());
    ret
  }}
);

/// Human readable size of a `width * height * channels` byte buffer.
pub fn buffer_size(width: u32, height: u32, channels: u32) -> String {
  use humansize::{FileSize, file_size_opts as options};

  (width as u64 * height as u64 * channels as u64)
    .file_size(options::BINARY)
    .unwrap_or_else(|e| e)
}
