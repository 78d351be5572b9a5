use std::rc::Rc;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::runtime::Handle;

use crate::api::ShopApi;
use crate::bus::EventBus;
use crate::config::Config;
use crate::net::NetRunner;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(config: &Config, handle: Handle) -> Result<()> {
    let api = ShopApi::new(&config.api.base_url, &config.api.cdn_url)
        .context("building HTTP client")?;

    let (mut terminal, guard) = setup_terminal().context("entering raw mode")?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    let net = NetRunner::new(Arc::new(api), handle, events.sender());
    let mut app = App::new(EventBus::new(), Rc::new(net));
    app.start();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Net(event)) => app.on_net(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
