// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc::{Receiver, TryRecvError}, Arc},
    time::Instant,
};

use eframe::egui::{self, RichText};

use crate::{
    config::{
        consts::{APP_TITLE, CONTENT_MAX_WIDTH},
        options::AppOptions,
        state::{Effect, Msg, UiState},
    },
    data::Tables,
    fetch::{self, Fetched, Source},
    store,
    view::{self, TabView},
};

use super::{components, router};

pub fn run(native: eframe::NativeOptions, options: AppOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        native,
        Box::new(|cc| Ok(Box::new(App::new(cc, options)))),
    )?;
    Ok(())
}

pub struct App {
    pub options: AppOptions,

    // single source of truth for the view (UI thread only)
    pub state: UiState,
    pub tables: Tables,

    // in-flight refresh
    inbox: Option<Receiver<Fetched>>,
    pending: usize,
    failed: usize,
    last_fetch: Option<Instant>,

    pub status: String,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, options: AppOptions) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Light);

        let mut tables = Tables::default();
        let mut status = s!("Idle");

        if options.cache.use_cache {
            for source in Source::ALL {
                match store::load_raw(&options.cache.dir, source) {
                    Ok(text) => {
                        tables.apply_text(source, &text);
                        logf!("Cache: Loaded {source}");
                        status = s!("Loaded local data");
                    }
                    Err(e) => logd!("Cache: Missing {source} ({e})"),
                }
            }
        }

        let mut app = Self {
            options,
            state: UiState::default(),
            tables,
            inbox: None,
            pending: 0,
            failed: 0,
            last_fetch: None,
            status,
        };
        app.refresh(&cc.egui_ctx);
        app
    }

    #[inline]
    pub fn busy(&self) -> bool { self.pending > 0 }

    pub fn dispatch(&mut self, ctx: &egui::Context, msg: Msg) {
        match self.state.update(msg) {
            Effect::Fetch => self.refresh(ctx),
            Effect::None => {}
        }
    }

    /// Kick off a download of all sources unless one is already running.
    fn refresh(&mut self, ctx: &egui::Context) {
        if self.busy() {
            logd!("Fetch: refresh ignored, {} pending", self.pending);
            return;
        }
        let repaint_ctx = ctx.clone();
        let notify: fetch::Notify = Arc::new(move || repaint_ctx.request_repaint());

        self.inbox = Some(fetch::spawn_all(&self.options, &Source::ALL, Some(notify)));
        self.pending = Source::ALL.len();
        self.failed = 0;
        self.last_fetch = Some(Instant::now());
        self.status = s!("Fetching…");
    }

    /// Drain finished downloads into their table slots.
    fn poll(&mut self) {
        let Some(rx) = self.inbox.as_ref() else { return };
        let mut done = Vec::new();
        loop {
            match rx.try_recv() {
                Ok(f) => done.push(f),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    // workers gone without reporting; don't wait forever
                    self.pending = 0;
                    break;
                }
            }
        }

        for Fetched { source, result } in done {
            self.pending = self.pending.saturating_sub(1);
            match result {
                Ok(text) => {
                    if self.options.cache.use_cache {
                        if let Err(e) = store::save_raw(&self.options.cache.dir, source, &text) {
                            loge!("Cache: Save failed {source}: {e}");
                        }
                    }
                    self.tables.apply_text(source, &text);
                }
                Err(e) => {
                    self.failed += 1;
                    self.status = format!("Error ({source}): {e}");
                }
            }
        }

        if self.pending == 0 {
            self.inbox = None;
            if self.failed == 0 {
                self.status = s!("Up to date");
            }
        }
    }

    fn maybe_auto_refresh(&mut self, ctx: &egui::Context) {
        let Some(every) = self.options.net.refresh_every() else { return };
        let due = self.last_fetch.map(|t| t.elapsed() >= every).unwrap_or(true);
        if due && !self.busy() {
            logd!("Fetch: auto refresh");
            self.refresh(ctx);
        }
        ctx.request_repaint_after(every);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll();
        self.maybe_auto_refresh(ctx);

        let mut msgs: Vec<Msg> = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            let side = ((ui.available_width() - CONTENT_MAX_WIDTH) / 2.0).max(0.0);
            ui.horizontal_top(|ui| {
                ui.add_space(side);
                ui.vertical(|ui| {
                    ui.set_max_width(CONTENT_MAX_WIDTH);

                    ui.label(RichText::new(APP_TITLE).size(28.0).strong());
                    ui.add_space(8.0);

                    msgs.extend(components::tabs::draw(ui, &self.state));
                    ui.add_space(8.0);
                    msgs.extend(components::status_bar::draw(
                        ui, &self.status, self.busy(), self.failed > 0,
                    ));
                    ui.add_space(8.0);

                    let view = view::build(self.state.active_tab, &self.tables);
                    egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            if let TabView::Loading(text) = &view {
                                ui.label(*text);
                            } else {
                                let page = router::page_for(self.state.active_tab);
                                msgs.extend(page.draw(ui, &view, &self.state));
                            }
                        });
                });
            });
        });

        for msg in msgs {
            self.dispatch(ctx, msg);
        }
    }
}
