use crate::ui::{main_content, sidebar, top_nav};
use premarket_core::{filter_records, FilterCriteria, FilterOutcome, NseClient, Snapshot};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

#[derive(Debug)]
pub enum LoadMessage {
    Done(Result<Snapshot, String>),
}

pub struct PremarketApp {
    pub client: NseClient,
    pub snapshot: Option<Snapshot>,
    pub load_error: Option<String>,
    pub is_loading: bool,
    pub load_receiver: Option<Receiver<LoadMessage>>,
    // Sidebar inputs, read on every "Apply Filter"
    pub criteria: FilterCriteria,
    pub outcome: Option<FilterOutcome>,
    pub copy_status: String,
}

impl PremarketApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, client: NseClient) -> Self {
        let mut app = Self::with_client(client);
        app.start_load();
        app
    }

    pub fn with_client(client: NseClient) -> Self {
        Self {
            client,
            snapshot: None,
            load_error: None,
            is_loading: false,
            load_receiver: None,
            criteria: FilterCriteria::default(),
            outcome: None,
            copy_status: String::new(),
        }
    }

    /// Full session bootstrap + fetch on a worker thread. Ignored while a
    /// load is already in flight.
    pub fn start_load(&mut self) {
        if self.is_loading {
            return;
        }
        self.is_loading = true;
        self.load_error = None;
        self.snapshot = None;
        self.outcome = None;
        self.copy_status.clear();

        let (tx, rx) = mpsc::channel();
        self.load_receiver = Some(rx);

        let client = self.client.clone();
        thread::spawn(move || {
            let result = client.load_snapshot().map_err(|e| e.to_string());
            let _ = tx.send(LoadMessage::Done(result));
        });
    }

    pub fn poll_load(&mut self) {
        let Some(ref rx) = self.load_receiver else {
            return;
        };
        match rx.try_recv() {
            Ok(LoadMessage::Done(result)) => {
                self.finish_load(result);
            }
            Err(TryRecvError::Empty) => {
                // Still loading
            }
            Err(TryRecvError::Disconnected) => {
                self.finish_load(Err("Load thread disconnected".to_string()));
            }
        }
    }

    pub fn finish_load(&mut self, result: Result<Snapshot, String>) {
        self.is_loading = false;
        self.load_receiver = None;
        match result {
            Ok(snapshot) => {
                log::info!(
                    "Loaded {} records ({} filterable)",
                    snapshot.records.len(),
                    snapshot.eligible_count()
                );
                self.snapshot = Some(snapshot);
            }
            Err(e) => {
                log::error!("{}", e);
                self.load_error = Some(e);
            }
        }
    }

    pub fn apply_filter(&mut self) {
        let records = self.snapshot.as_ref().map(|s| s.records.as_slice()).unwrap_or(&[]);
        self.outcome = Some(filter_records(records, &self.criteria));
        self.copy_status.clear();
    }
}

impl eframe::App for PremarketApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();
        if self.is_loading {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("top_nav").show(ctx, |ui| {
            top_nav::render(ui, self);
        });

        // The filter sidebar only appears once there is data to filter
        if self.snapshot.as_ref().is_some_and(|s| !s.records.is_empty()) {
            egui::SidePanel::left("sidebar")
                .exact_width(250.0)
                .show(ctx, |ui| {
                    sidebar::render(ui, self);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            main_content::render(ui, self);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use premarket_core::{NseConfig, RawRecord};

    fn app() -> PremarketApp {
        PremarketApp::with_client(NseClient::new(NseConfig::default()).unwrap())
    }

    fn record(symbol: &str, p_change: f64) -> RawRecord {
        RawRecord {
            symbol: Some(symbol.to_string()),
            p_change: Some(p_change),
            last_price: Some(500.0),
            total_turnover: Some(1_000_000.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_apply_filter_without_snapshot_reports_no_source_data() {
        let mut app = app();
        app.apply_filter();
        assert_eq!(app.outcome, Some(FilterOutcome::NoSourceData));
    }

    #[test]
    fn test_apply_filter_reads_current_criteria() {
        let mut app = app();
        app.finish_load(Ok(Snapshot::new(vec![record("A", 1.0), record("B", 8.0)])));
        assert!(!app.is_loading);

        app.apply_filter();
        assert_eq!(app.outcome.as_ref().map(|o| o.rows().len()), Some(2));

        app.criteria.pchange_max = 5.0;
        app.apply_filter();
        let rows = app.outcome.as_ref().unwrap().rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].symbol, "A");
    }

    #[test]
    fn test_failed_load_keeps_message() {
        let mut app = app();
        app.finish_load(Err("Error fetching cookies: connection refused".to_string()));
        assert!(app.snapshot.is_none());
        assert_eq!(app.load_error.as_deref(), Some("Error fetching cookies: connection refused"));
    }
}
