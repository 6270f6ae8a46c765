use once_cell::sync::OnceCell;

/// Constants.
pub mod constants;

/// Check <https://www.rustwiki.org.cn/en/reference/introduction.html> for help information.
pub(crate) mod macros;

/// Install the default `tracing` subscriber, at most once per process.
///
/// An already installed global subscriber is left untouched. Without the
/// `log` feature this does nothing.
pub fn init_log() {
    static INIT: OnceCell<()> = OnceCell::new();
    _ = INIT.get_or_init(|| {
        cfg_if::cfg_if! {
            if #[cfg(feature = "log")] {
                _ = tracing_subscriber::fmt()
                    .with_thread_names(true)
                    .with_line_number(true)
                    .with_timer(tracing_subscriber::fmt::time::OffsetTime::new(
                        time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC),
                        time::format_description::well_known::Rfc2822,
                    ))
                    .try_init();
            }
        }
    });
}
