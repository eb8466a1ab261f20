/*!
 * GUI dashboard for hungermap-rs - WFP HungerMap country indicators
 *
 * A cross-platform desktop application providing:
 * - A country dropdown synced to a map viewport and an info panel
 * - An indicator toolbar (IPC, FCS, Climate, Hazards) with live FCS lookups
 * - CSV/JSON export of the normalized country list
 *
 * Platform support: Windows, macOS, Linux
 */

use eframe::egui;
use hungermap_rs::{
    Client, CoordinateIndex, CoordinateStrategy, Country, Indicator, LngLat, MapView, MetricPanel,
    Normalizer, SelectionCoordinator, models::FoodSecurityResponse, storage,
};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([700.0, 480.0])
            .with_title("HungerMap Dashboard - hungermap-rs"),
        ..Default::default()
    };

    eframe::run_native(
        "HungerMap Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(DashboardApp::new()))),
    )
}

#[derive(Debug, Clone, PartialEq)]
enum ExportFormat {
    Csv,
    Json,
}

/// Main application state
struct DashboardApp {
    coordinator: SelectionCoordinator,
    panel: MetricPanel,
    map: ViewportPanel,

    // Export options
    export_format: ExportFormat,
    export_path: String,

    // UI state
    is_loading_countries: bool,
    status_message: String,
    error_message: String,

    // Background operations
    countries_receiver: Option<mpsc::Receiver<Result<Vec<Country>, String>>>,
    fcs_receiver: Option<mpsc::Receiver<anyhow::Result<FoodSecurityResponse>>>,
}

impl DashboardApp {
    fn new() -> Self {
        // Default to user's home directory for export output
        let home_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .to_string_lossy()
            .to_string();

        let mut map = ViewportPanel::new();
        map.initialize(LngLat::new(30.0, 15.0), 2.0);

        let mut app = Self {
            coordinator: SelectionCoordinator::new(CoordinateStrategy::Static(
                CoordinateIndex::builtin(),
            )),
            panel: MetricPanel::new(),
            map,
            export_format: ExportFormat::Csv,
            export_path: home_dir,
            is_loading_countries: false,
            status_message: String::new(),
            error_message: String::new(),
            countries_receiver: None,
            fcs_receiver: None,
        };
        app.start_country_fetch();
        app
    }

    fn start_country_fetch(&mut self) {
        self.is_loading_countries = true;
        self.error_message.clear();
        self.status_message = "Fetching country list...".to_string();

        let (sender, receiver) = mpsc::channel();
        self.countries_receiver = Some(receiver);

        thread::spawn(move || {
            let client = Client::default();
            let normalizer =
                Normalizer::new(CoordinateStrategy::Static(CoordinateIndex::builtin()));
            let result = normalizer
                .fetch_countries(&client)
                .map_err(|err| format!("Failed to fetch countries: {err}"));
            let _ = sender.send(result);
        });
    }

    fn start_fcs_fetch(&mut self, iso3: String) {
        self.panel.begin_fcs();

        let (sender, receiver) = mpsc::channel();
        self.fcs_receiver = Some(receiver);

        thread::spawn(move || {
            let client = Client::default();
            let _ = sender.send(client.fetch_food_security(&iso3));
        });
    }

    fn poll_background(&mut self) {
        if let Some(receiver) = &self.countries_receiver
            && let Ok(result) = receiver.try_recv()
        {
            self.is_loading_countries = false;
            self.countries_receiver = None;

            match result {
                Ok(countries) => {
                    self.status_message = format!("Loaded {} countries", countries.len());
                    self.coordinator.set_countries(countries);
                }
                Err(error) => {
                    self.error_message = error;
                    self.status_message.clear();
                }
            }
        }

        if let Some(receiver) = &self.fcs_receiver
            && let Ok(result) = receiver.try_recv()
        {
            self.fcs_receiver = None;
            self.panel.finish_fcs(result);
        }
    }

    fn export_countries(&mut self) {
        let dir = PathBuf::from(&self.export_path);
        let result = match self.export_format {
            ExportFormat::Csv => {
                let path = dir.join("hungermap_countries.csv");
                storage::save_csv(self.coordinator.countries(), &path).map(|()| path)
            }
            ExportFormat::Json => {
                let path = dir.join("hungermap_countries.json");
                storage::save_json(self.coordinator.countries(), &path).map(|()| path)
            }
        };
        match result {
            Ok(path) => {
                self.status_message = format!(
                    "Saved {} countries to {}",
                    self.coordinator.countries().len(),
                    path.display()
                );
                self.error_message.clear();
            }
            Err(err) => {
                self.error_message = format!("Failed to save: {err}");
                self.status_message.clear();
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for completed background operations
        self.poll_background();

        // Request repaint while loading (for spinner animation)
        if self.is_loading_countries || self.panel.is_loading() {
            ctx.request_repaint();
        }

        egui::SidePanel::right("controls")
            .min_width(340.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.heading("HungerMap Dashboard");
                    ui.add_space(10.0);

                    // Country dropdown
                    ui.group(|ui| {
                        let selected_text = self
                            .coordinator
                            .selected()
                            .map(|c| c.dropdown_label())
                            .unwrap_or_else(|| "--Select a Country--".to_string());

                        let mut clicked: Option<String> = None;
                        egui::ComboBox::from_label("Select a country:")
                            .width(240.0)
                            .selected_text(selected_text)
                            .show_ui(ui, |ui| {
                                for c in self.coordinator.countries() {
                                    let is_selected = self
                                        .coordinator
                                        .selected()
                                        .is_some_and(|s| s.iso3 == c.iso3);
                                    if ui
                                        .selectable_label(is_selected, c.dropdown_label())
                                        .clicked()
                                    {
                                        clicked = Some(c.iso3.clone());
                                    }
                                }
                            });
                        if let Some(code) = clicked {
                            self.panel.clear();
                            self.coordinator.select_static(&code, &mut self.map);
                        }

                        if self.is_loading_countries {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label("Loading countries...");
                            });
                        } else if ui.button("Reload countries").clicked() {
                            self.start_country_fetch();
                        }
                    });

                    ui.add_space(10.0);

                    // Country info
                    ui.group(|ui| {
                        if let Some(c) = self.coordinator.selected() {
                            ui.heading(c.name.as_str());
                            ui.label(format!("Population: {}", c.population));
                            ui.label(format!("Income Group: {}", c.income_group));
                        } else {
                            ui.label("Select a country to see its information.");
                        }
                    });

                    ui.add_space(10.0);

                    // Indicator toolbar, shown once a country is selected
                    let selected_iso3 = self.coordinator.selected().map(|c| c.iso3.clone());
                    if let Some(iso3) = selected_iso3 {
                        ui.group(|ui| {
                            ui.label("Data sources");
                            ui.horizontal(|ui| {
                                for indicator in Indicator::ALL {
                                    let busy = indicator == Indicator::Fcs
                                        && self.panel.is_loading();
                                    if ui
                                        .add_enabled(
                                            !busy,
                                            egui::Button::new(indicator.label()),
                                        )
                                        .clicked()
                                    {
                                        match indicator {
                                            Indicator::Fcs => {
                                                self.start_fcs_fetch(iso3.clone())
                                            }
                                            other => self.panel.show_placeholder(other),
                                        }
                                    }
                                }
                            });
                            if self.panel.is_loading() {
                                ui.horizontal(|ui| {
                                    ui.spinner();
                                    ui.label("Fetching FCS data...");
                                });
                            }
                            if let Some(info) = self.panel.info() {
                                ui.label(info.to_string());
                            }
                        });
                        ui.add_space(10.0);
                    }

                    // Export options
                    ui.collapsing("Export", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Format:");
                            ui.radio_value(&mut self.export_format, ExportFormat::Csv, "CSV");
                            ui.radio_value(&mut self.export_format, ExportFormat::Json, "JSON");
                        });

                        ui.horizontal(|ui| {
                            ui.label("Output path:");
                            ui.text_edit_singleline(&mut self.export_path);
                            if ui.button("Browse").clicked()
                                && let Some(path) = rfd::FileDialog::new().pick_folder()
                            {
                                self.export_path = path.to_string_lossy().to_string();
                            }
                        });

                        let has_countries = !self.coordinator.countries().is_empty();
                        if ui
                            .add_enabled(has_countries, egui::Button::new("Export country list"))
                            .clicked()
                        {
                            self.export_countries();
                        }
                    });

                    ui.add_space(10.0);

                    // Status messages
                    if !self.status_message.is_empty() {
                        ui.colored_label(egui::Color32::DARK_GREEN, &self.status_message);
                    }
                    if !self.error_message.is_empty() {
                        ui.colored_label(egui::Color32::RED, &self.error_message);
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.map.ui(ui);
        });
    }
}

/// Painted stand-in for the real map collaborator: tracks the viewport it is
/// told to fly to and draws a flat world grid with a marker at the center.
struct ViewportPanel {
    center: LngLat,
    zoom: f64,
    target_center: LngLat,
    target_zoom: f64,
    animating: bool,
}

impl ViewportPanel {
    fn new() -> Self {
        Self {
            center: LngLat::default(),
            zoom: 2.0,
            target_center: LngLat::default(),
            target_zoom: 2.0,
            animating: false,
        }
    }

    // Ease toward the fly-to target a little each frame.
    fn step(&mut self) {
        if !self.animating {
            return;
        }
        const T: f64 = 0.15;
        self.center.lng += (self.target_center.lng - self.center.lng) * T;
        self.center.lat += (self.target_center.lat - self.center.lat) * T;
        self.zoom += (self.target_zoom - self.zoom) * T;

        let close = (self.target_center.lng - self.center.lng).abs() < 0.01
            && (self.target_center.lat - self.center.lat).abs() < 0.01
            && (self.target_zoom - self.zoom).abs() < 0.01;
        if close {
            self.center = self.target_center;
            self.zoom = self.target_zoom;
            self.animating = false;
        }
    }

    fn project(&self, rect: egui::Rect, point: LngLat) -> egui::Pos2 {
        let x = rect.left() + ((point.lng + 180.0) / 360.0) as f32 * rect.width();
        let y = rect.top() + ((90.0 - point.lat) / 180.0) as f32 * rect.height();
        egui::pos2(x, y)
    }

    fn ui(&mut self, ui: &mut egui::Ui) {
        self.step();
        if self.animating {
            ui.ctx().request_repaint();
        }

        let size = egui::vec2(ui.available_width(), ui.available_height() - 20.0);
        let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
        let painter = ui.painter_at(rect);

        painter.rect_filled(rect, 4.0, egui::Color32::from_rgb(16, 24, 40));

        // Graticule every 30 degrees
        let grid = egui::Stroke::new(1.0, egui::Color32::from_rgb(40, 54, 80));
        for i in 0..=12 {
            let lng = -180.0 + 30.0 * i as f64;
            let top = self.project(rect, LngLat::new(lng, 90.0));
            let bottom = self.project(rect, LngLat::new(lng, -90.0));
            painter.line_segment([top, bottom], grid);
        }
        for i in 0..=6 {
            let lat = -90.0 + 30.0 * i as f64;
            let left = self.project(rect, LngLat::new(-180.0, lat));
            let right = self.project(rect, LngLat::new(180.0, lat));
            painter.line_segment([left, right], grid);
        }

        // Viewport center marker
        let marker = self.project(rect, self.center);
        painter.circle_filled(marker, 5.0, egui::Color32::from_rgb(224, 82, 82));
        painter.circle_stroke(
            marker,
            9.0,
            egui::Stroke::new(1.5, egui::Color32::from_rgb(224, 82, 82)),
        );

        ui.label(format!(
            "center ({:.2}, {:.2}) · zoom {:.1}",
            self.center.lng, self.center.lat, self.zoom
        ));
    }
}

impl MapView for ViewportPanel {
    fn initialize(&mut self, center: LngLat, zoom: f64) {
        self.center = center;
        self.zoom = zoom;
        self.target_center = center;
        self.target_zoom = zoom;
        self.animating = false;
    }

    fn fly_to(&mut self, center: LngLat, zoom: f64, _essential: bool) {
        self.target_center = center;
        self.target_zoom = zoom;
        self.animating = true;
    }

    fn dispose(&mut self) {}
}
