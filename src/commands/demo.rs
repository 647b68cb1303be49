//! Demo command handler

use std::time::Duration;

use anyhow::Result;
use tracing::debug;

use autopager::cli::DemoArgs;
use autopager::config::Config;
use autopager::theme::Theme;
use autopager::tui::PagerApp;
use autopager::{PageContainer, RunLoop};

/// Merge command-line flags over the loaded config.
pub fn effective_config(mut config: Config, args: &DemoArgs) -> Config {
    if let Some(pages) = args.pages {
        config.pager.pages = pages;
    }
    if let Some(duration) = args.duration {
        config.autoscroll.duration = duration;
    }
    if args.paused {
        config.autoscroll.enabled_on_start = false;
    }
    if args.no_cancel_on_scroll {
        config.autoscroll.cancels_on_scroll = false;
    }
    if args.restart_on_scroll_end {
        config.autoscroll.restarts_on_scroll_end = true;
    }
    if args.infinite {
        config.pager.infinite_scroll = true;
    }
    config
}

/// Run the interactive pager demo.
#[cfg(not(tarpaulin_include))]
pub fn handle_demo(args: &DemoArgs) -> Result<()> {
    let config = effective_config(Config::load()?, args);
    debug!(?config, "starting demo");

    let run_loop = RunLoop::system();
    let pager = PageContainer::new(run_loop.clone(), config.pager.pages);
    pager.set_infinite_scroll_enabled(config.pager.infinite_scroll);
    config.autoscroll.apply(pager.auto_scroller());

    let mut app = PagerApp::new(
        run_loop,
        pager,
        Theme::named(config.pager.theme),
        Duration::from_millis(config.pager.tick_rate_ms.max(1)),
    );
    app.run()
}
