#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod command;
pub mod config;
pub mod geom;
pub mod helix;
pub mod scene;

use std::fmt;

use command::{CommandRegistry, Dispatcher};
use config::EngineOptions;
use geom::{Point3, tessellate_curve_uniform};
use scene::{InMemoryScene, SceneCurve};
use serde::Serialize;
use wasm_bindgen::JsError;
use wasm_bindgen::prelude::*;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "console_error_panic_hook", target_arch = "wasm32"))] {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            console_error_panic_hook::set_once();
            init_logger();
        }
    } else {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            // no-op fallback when panic hook is disabled
            init_logger();
        }
    }
}

#[cfg(feature = "debug_logs")]
fn init_logger() {
    use log::LevelFilter;
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    log::set_logger(&DEFAULT_LOGGER).expect("error initializing logger");
    log::set_max_level(LevelFilter::Debug);
}

#[cfg(not(feature = "debug_logs"))]
fn init_logger() {
    // no-op fallback when debug logs are disabled
}

#[macro_export]
macro_rules! debug_log {
    ($($t:tt)*) => {{
        #[cfg(feature = "debug_logs")]
        {
            #[cfg(target_arch = "wasm32")]
            {
                ::web_sys::console::log_1(&::wasm_bindgen::JsValue::from_str(&format!($($t)*)));
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                println!("{}", format!($($t)*));
            }
        }
    }};
}

/// Curve in de scene zoals die naar de frontend gaat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveExport {
    pub id: u64,
    pub name: String,
    pub degree: usize,
    pub control_points: Vec<Point3>,
    /// Knots in hostconventie, zonder de impliciete eindknots.
    pub knots: Vec<f64>,
    pub preview: Vec<Point3>,
}

impl CurveExport {
    fn from_scene(entry: &SceneCurve, samples_per_span: usize) -> Self {
        let curve = &entry.curve;
        let steps = curve.spans() * samples_per_span.max(1);
        let preview = tessellate_curve_uniform(curve, steps);
        debug_log!(
            "preview {}: {} punten over {} spans",
            entry.name,
            preview.len(),
            curve.spans()
        );

        Self {
            id: entry.curve_id,
            name: entry.name.clone(),
            degree: curve.degree,
            control_points: curve.control_points.clone(),
            knots: curve.host_knots().to_vec(),
            preview,
        }
    }
}

/// Exporteert alle curves van de scene, met een preview-polyline van
/// `samples_per_span` segmenten per span.
#[must_use]
pub fn export_curves(scene: &InMemoryScene, samples_per_span: usize) -> Vec<CurveExport> {
    scene
        .curves()
        .map(|entry| CurveExport::from_scene(entry, samples_per_span))
        .collect()
}

/// Public entry point for consumers.
#[wasm_bindgen]
pub struct Engine {
    initialized: bool,
    dispatcher: Dispatcher,
    scene: InMemoryScene,
    options: EngineOptions,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Engine {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Engine {
        Self::from_options(EngineOptions::default())
    }

    /// Maak een engine met opties uit JavaScript, bijvoorbeeld
    /// `{ historyDepth: 50, previewSamplesPerSpan: 16 }`.
    #[wasm_bindgen]
    pub fn with_options(options: JsValue) -> Result<Engine, JsValue> {
        let options = if options.is_undefined() || options.is_null() {
            EngineOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options).map_err(to_js_error)?
        };
        Ok(Self::from_options(options))
    }

    /// Geeft terug of de engine de minimale initialisatie heeft doorlopen.
    #[wasm_bindgen]
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Voer een commandoregel uit en geef het journal-record terug.
    #[wasm_bindgen]
    pub fn execute(&mut self, line: &str) -> Result<String, JsValue> {
        self.dispatcher
            .execute(line, &mut self.scene)
            .map(|record| record.to_string())
            .map_err(to_js_error)
    }

    #[wasm_bindgen]
    pub fn undo(&mut self) -> Result<(), JsValue> {
        self.dispatcher.undo(&mut self.scene).map_err(to_js_error)
    }

    #[wasm_bindgen]
    pub fn redo(&mut self) -> Result<(), JsValue> {
        self.dispatcher.redo(&mut self.scene).map_err(to_js_error)
    }

    #[wasm_bindgen]
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.dispatcher.can_undo()
    }

    #[wasm_bindgen]
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.dispatcher.can_redo()
    }

    /// Het journal als lijst van commandoregels.
    #[wasm_bindgen]
    pub fn get_journal(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.journal_lines()).map_err(to_js_error)
    }

    /// Alle curves in de scene, inclusief preview-polylines.
    #[wasm_bindgen]
    pub fn get_curves(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.curves()).map_err(to_js_error)
    }
}

impl Engine {
    fn from_options(options: EngineOptions) -> Self {
        Self {
            initialized: true,
            dispatcher: Dispatcher::new(CommandRegistry::default(), &options),
            scene: InMemoryScene::new(),
            options,
        }
    }

    #[must_use]
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    #[must_use]
    pub fn scene(&self) -> &InMemoryScene {
        &self.scene
    }

    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    #[must_use]
    pub fn journal_lines(&self) -> Vec<String> {
        self.dispatcher
            .journal()
            .entries()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[must_use]
    pub fn curves(&self) -> Vec<CurveExport> {
        export_curves(&self.scene, self.options.preview_samples_per_span)
    }
}

fn to_js_error<E: fmt::Display>(error: E) -> JsValue {
    js_error(&error.to_string())
}

fn js_error(message: &str) -> JsValue {
    #[cfg(target_arch = "wasm32")]
    {
        JsError::new(message).into()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        JsValue::NULL
    }
}
