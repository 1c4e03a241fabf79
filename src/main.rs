// SPDX-License-Identifier: MPL-2.0
use iced_parts::app::{self, Flags};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_parts=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring invalid --lang");
            None
        }),
        config_path: args.opt_value_from_str("--config").unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring invalid --config");
            None
        }),
        menu_path: args.opt_value_from_str("--menu").unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring invalid --menu");
            None
        }),
    };

    app::run(flags)
}
