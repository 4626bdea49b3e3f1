mod dashboard;
mod state;
mod ui;

use crate::config::AppConfig;
use crate::upload::SelectedFile;
use derivative::Derivative;
use eframe::App;
use std::path::Path;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::{info, warn};

use state::{Page, SessionState};

#[derive(Derivative)]
#[derivative(Debug)]
pub struct SkyVault {
    config: AppConfig,
    #[derivative(Debug = "ignore")]
    runtime: Handle,
    #[derivative(Debug = "ignore")]
    state: SessionState,
}

impl SkyVault {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig, runtime: Handle) -> Self {
        info!("Initializing SkyVault");
        let state = SessionState::new(&config);
        Self {
            config,
            runtime,
            state,
        }
    }

    pub fn update_state(&mut self, ctx: &egui::Context) {
        if self.state.poll() {
            ctx.request_repaint();
        }
        if self.state.gate.is_logging_in() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }

        if self.state.page == Page::Upload {
            self.collect_dropped_files(ctx);
        } else {
            self.state.is_dragging = false;
        }
    }

    fn collect_dropped_files(&mut self, ctx: &egui::Context) {
        let (hovering, dropped) = ctx.input(|i| {
            (
                !i.raw.hovered_files.is_empty(),
                i.raw.dropped_files.clone(),
            )
        });
        self.state.is_dragging = hovering;

        if dropped.is_empty() {
            return;
        }

        let files: Vec<_> = dropped
            .into_iter()
            .filter_map(|file| match file.path {
                Some(path) => Self::read_selected(&path),
                None => {
                    let size = file.bytes.as_ref().map_or(0, |bytes| bytes.len() as u64);
                    Some(SelectedFile::new(file.name, size, None))
                }
            })
            .collect();
        let added = self.state.queue.add_many(files);
        info!(added, "Files dropped into upload zone");
    }

    pub(crate) fn pick_files(&mut self) {
        let Some(paths) = rfd::FileDialog::new().pick_files() else {
            return;
        };
        let files: Vec<_> = paths.iter().filter_map(|p| Self::read_selected(p)).collect();
        let added = self.state.queue.add_many(files);
        info!(added, "Files selected for upload");
    }

    fn read_selected(path: &Path) -> Option<SelectedFile> {
        match SelectedFile::from_path(path) {
            Ok(file) => Some(file),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Skipping unreadable file");
                None
            }
        }
    }
}

impl App for SkyVault {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}
