use std::time::Instant;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use chat_widget_sim::config::WidgetConfig;
use chat_widget_sim::event::WidgetEvent;
use chat_widget_sim::reply::CannedResponses;
use chat_widget_sim::view::ConsoleView;
use chat_widget_sim::ChatWidget;

/// Drive the simulated chat widget from the command line.
#[derive(Parser, Debug)]
#[command(name = "chat-sim", about = "Simulated support chat widget")]
struct Args {
    /// Message(s) to send; repeatable. Defaults to a short demo script.
    #[arg(short, long = "message")]
    messages: Vec<String>,

    /// Viewport width in logical pixels (below 768 uses the narrow layout).
    #[arg(long, default_value_t = 1024)]
    width: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = WidgetConfig::load();

    let view = ConsoleView::new(config.user_label.clone(), config.admin_label.clone());
    let responses =
        CannedResponses::with_delay_range(config.reply_delay_min(), config.reply_delay_max());
    let mut widget = ChatWidget::new(view, responses);
    if !config.auto_focus {
        widget = widget.without_auto_focus();
    }

    let messages = if args.messages.is_empty() {
        vec![
            "Hi! Is the tournament still on this weekend?".to_string(),
            "Great, how do I sign up?".to_string(),
        ]
    } else {
        args.messages
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    runtime.block_on(async {
        widget.dispatch(WidgetEvent::ViewportResized { width: args.width });
        widget.dispatch(WidgetEvent::OpenRequested);
        for message in messages {
            widget.dispatch(WidgetEvent::SubmitRequested(message));
        }

        // Single cooperative loop: sleep to the next deadline, then fire.
        while let Some(deadline) = widget.next_deadline() {
            tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
            widget.dispatch(WidgetEvent::Tick(Instant::now()));
        }

        widget.dispatch(WidgetEvent::CloseRequested);
    });

    Ok(())
}
