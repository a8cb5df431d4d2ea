//! Het `helixToolCmd`-commando: parameters ontleden, de helix aanmaken en
//! undo, redo en journaling afhandelen.

use crate::helix::{GeneratedCurve, HelixParameters};
use crate::scene::{CurveConstruction, CurveHandle, CurveHost};

use super::error::CommandError;
use super::journal::JournalRecord;
use super::syntax::{ArgDatabase, ArgType, Syntax};
use super::ToolCommand;

pub const COMMAND_NAME: &str = "helixToolCmd";

const PITCH_FLAG: &str = "-p";
const PITCH_FLAG_LONG: &str = "-pitch";
const RADIUS_FLAG: &str = "-r";
const RADIUS_FLAG_LONG: &str = "-radius";
const NUMBER_CVS_FLAG: &str = "-ncv";
const NUMBER_CVS_FLAG_LONG: &str = "-numCVs";
const UPSIDE_DOWN_FLAG: &str = "-ud";
const UPSIDE_DOWN_FLAG_LONG: &str = "-upsideDown";

/// Vlaggentabel van `helixToolCmd`.
#[must_use]
pub fn syntax() -> Syntax {
    Syntax::new()
        .with_flag(PITCH_FLAG, PITCH_FLAG_LONG, ArgType::Double)
        .with_flag(RADIUS_FLAG, RADIUS_FLAG_LONG, ArgType::Double)
        .with_flag(NUMBER_CVS_FLAG, NUMBER_CVS_FLAG_LONG, ArgType::Unsigned)
        .with_flag(UPSIDE_DOWN_FLAG, UPSIDE_DOWN_FLAG_LONG, ArgType::Boolean)
}

/// Levenscyclus van één helix-commando.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandState {
    /// Aangemaakt met standaardparameters.
    Initial,
    /// Argumenten zijn ontleed, er staat nog niets in de scene.
    Parsed,
    /// De curve bestaat; het commando is eigenaar van de handle.
    Created { curve: CurveHandle },
    /// Als `Created`, maar het journal-record is al opgemaakt.
    Finalized { curve: CurveHandle },
    /// De curve is verwijderd door undo.
    Undone,
    /// Aanmaken is mislukt; er valt niets ongedaan te maken.
    Failed,
}

impl CommandState {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Initial => "Initial",
            Self::Parsed => "Parsed",
            Self::Created { .. } => "Created",
            Self::Finalized { .. } => "Finalized",
            Self::Undone => "Undone",
            Self::Failed => "Failed",
        }
    }

    #[must_use]
    pub fn curve(&self) -> Option<&CurveHandle> {
        match self {
            Self::Created { curve } | Self::Finalized { curve } => Some(curve),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct HelixToolCommand {
    params: HelixParameters,
    state: CommandState,
    generated: Option<GeneratedCurve>,
}

impl Default for HelixToolCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl HelixToolCommand {
    #[must_use]
    pub fn new() -> Self {
        Self {
            params: HelixParameters::default(),
            state: CommandState::Initial,
            generated: None,
        }
    }

    /// Commando met vooraf ingestelde parameters, zoals een interactieve
    /// context het aanmaakt. Begint in [`CommandState::Parsed`].
    #[must_use]
    pub fn with_parameters(params: HelixParameters) -> Self {
        Self {
            params,
            state: CommandState::Parsed,
            generated: None,
        }
    }

    #[must_use]
    pub fn parameters(&self) -> &HelixParameters {
        &self.params
    }

    #[must_use]
    pub fn state(&self) -> &CommandState {
        &self.state
    }

    #[must_use]
    pub fn curve(&self) -> Option<&CurveHandle> {
        self.state.curve()
    }

    /// De CV's en knots van de laatste geslaagde constructie.
    #[must_use]
    pub fn generated(&self) -> Option<&GeneratedCurve> {
        self.generated.as_ref()
    }

    fn invalid_state(&self, operation: &'static str) -> CommandError {
        log::warn!(
            "{COMMAND_NAME}: {operation} geweigerd in toestand {}",
            self.state.name()
        );
        CommandError::InvalidState {
            operation,
            state: self.state.name(),
        }
    }

    /// Neemt de opgegeven vlaggen over; ontbrekende vlaggen houden hun
    /// standaardwaarde. Bij een fout blijven de parameters ongewijzigd.
    pub fn parse_arguments(&mut self, args: &ArgDatabase) -> Result<(), CommandError> {
        if self.state != CommandState::Initial {
            return Err(self.invalid_state("parseArguments"));
        }

        let mut params = self.params;
        if let Some(pitch) = args.flag_double(PITCH_FLAG)? {
            params.set_pitch(pitch);
        }
        if let Some(radius) = args.flag_double(RADIUS_FLAG)? {
            params.set_radius(radius);
        }
        if let Some(cv_count) = args.flag_unsigned(NUMBER_CVS_FLAG)? {
            params.set_cv_count(cv_count);
        }
        if let Some(upside_down) = args.flag_boolean(UPSIDE_DOWN_FLAG)? {
            params.set_upside_down(upside_down);
        }

        self.params = params;
        self.state = CommandState::Parsed;
        Ok(())
    }

    /// Genereert de helix en laat de host de curve bouwen.
    pub fn create(&mut self, host: &mut dyn CurveHost) -> Result<(), CommandError> {
        if self.state != CommandState::Parsed {
            return Err(self.invalid_state("create"));
        }
        self.build(host)
    }

    pub fn undo(&mut self, host: &mut dyn CurveHost) -> Result<(), CommandError> {
        let Some(curve) = self.state.curve() else {
            return Err(self.invalid_state("undo"));
        };

        // Bij een fout blijft de handle staan, zodat de aanroeper de
        // inconsistentie ziet.
        let transform = host
            .owning_transform(curve)
            .map_err(CommandError::deletion)?;
        host.delete_node(transform)
            .map_err(CommandError::deletion)?;

        log::debug!("{COMMAND_NAME}: {transform} verwijderd");
        self.state = CommandState::Undone;
        Ok(())
    }

    /// Bouwt de curve opnieuw uit dezelfde parameters.
    pub fn redo(&mut self, host: &mut dyn CurveHost) -> Result<(), CommandError> {
        if self.state != CommandState::Undone {
            return Err(self.invalid_state("redo"));
        }
        self.build(host)
    }

    /// Maakt het journal-record op. Undo en redo blijven daarna mogelijk.
    pub fn finalize(&mut self) -> Result<JournalRecord, CommandError> {
        match std::mem::replace(&mut self.state, CommandState::Failed) {
            CommandState::Created { curve } | CommandState::Finalized { curve } => {
                self.state = CommandState::Finalized { curve };
                Ok(self.record())
            }
            other => {
                self.state = other;
                Err(self.invalid_state("finalize"))
            }
        }
    }

    /// Commandoregel die dit commando met dezelfde parameters herhaalt.
    #[must_use]
    pub fn record(&self) -> JournalRecord {
        JournalRecord::new(COMMAND_NAME)
            .with_flag(RADIUS_FLAG, self.params.radius)
            .with_flag(PITCH_FLAG, self.params.pitch)
            .with_flag(NUMBER_CVS_FLAG, self.params.cv_count)
            .with_flag(UPSIDE_DOWN_FLAG, self.params.upside_down)
    }

    fn build(&mut self, host: &mut dyn CurveHost) -> Result<(), CommandError> {
        let result = self.params.generate().map_err(CommandError::construction).and_then(
            |generated| {
                let request = CurveConstruction {
                    control_vertices: &generated.control_vertices,
                    knots: &generated.knots,
                    degree: generated.degree,
                    form: generated.form,
                    periodic: false,
                    rational: false,
                };
                let curve = host
                    .construct_curve(&request)
                    .map_err(CommandError::construction)?;
                Ok((curve, generated))
            },
        );

        match result {
            Ok((curve, generated)) => {
                log::debug!(
                    "{COMMAND_NAME}: helix met {} CV's aangemaakt (curve #{})",
                    generated.control_vertices.len(),
                    curve.id()
                );
                self.generated = Some(generated);
                self.state = CommandState::Created { curve };
                Ok(())
            }
            Err(err) => {
                log::warn!("{COMMAND_NAME}: {err}");
                self.state = CommandState::Failed;
                Err(err)
            }
        }
    }
}

impl ToolCommand for HelixToolCommand {
    fn name(&self) -> &'static str {
        COMMAND_NAME
    }

    fn do_it(&mut self, args: &ArgDatabase, host: &mut dyn CurveHost) -> Result<(), CommandError> {
        self.parse_arguments(args)?;
        self.create(host)
    }

    fn redo_it(&mut self, host: &mut dyn CurveHost) -> Result<(), CommandError> {
        self.redo(host)
    }

    fn undo_it(&mut self, host: &mut dyn CurveHost) -> Result<(), CommandError> {
        self.undo(host)
    }

    fn is_undoable(&self) -> bool {
        true
    }

    fn finalize(&mut self) -> Result<JournalRecord, CommandError> {
        HelixToolCommand::finalize(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{CommandState, HelixToolCommand, syntax};
    use crate::command::error::{ArgumentError, CommandError};
    use crate::command::syntax::tokenize;
    use crate::geom::{Point3, Tolerance};
    use crate::helix::HelixParameters;
    use crate::scene::{CurveHost, InMemoryScene};

    fn parsed(args: &[&str]) -> HelixToolCommand {
        let db = syntax().parse(args).expect("parse");
        let mut command = HelixToolCommand::new();
        command.parse_arguments(&db).expect("argumenten");
        command
    }

    #[test]
    fn full_lifecycle_creates_and_removes_curve() {
        let mut scene = InMemoryScene::new();
        let mut command = parsed(&[]);
        assert_eq!(command.state(), &CommandState::Parsed);

        command.create(&mut scene).expect("create");
        assert_eq!(command.state().name(), "Created");
        assert_eq!(scene.len(), 1);

        let record = command.finalize().expect("finalize");
        assert_eq!(record.to_string(), "helixToolCmd -r 2 -p 0.25 -ncv 20 -ud false");
        assert_eq!(command.state().name(), "Finalized");

        command.undo(&mut scene).expect("undo");
        assert_eq!(command.state(), &CommandState::Undone);
        assert!(scene.is_empty());

        command.redo(&mut scene).expect("redo");
        assert_eq!(command.state().name(), "Created");
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn custom_flags_shape_the_curve() {
        let mut scene = InMemoryScene::new();
        let mut command = parsed(&["-r", "5", "-p", "1", "-ncv", "10", "-ud", "true"]);
        command.create(&mut scene).expect("create");

        let generated = command.generated().expect("gegenereerd");
        assert_eq!(generated.control_vertices.len(), 10);
        assert_eq!(generated.knots.len(), 12);
        assert_eq!(generated.knots.last(), Some(&11.0));
        assert!(Tolerance::default_geom().approx_eq_point3(
            generated.control_vertices[1],
            Point3::new(5.0 * 1f64.cos(), -1.0, 5.0 * 1f64.sin()),
        ));

        let stored = scene.curve(command.curve().expect("handle")).expect("curve");
        assert_eq!(stored.curve.control_points, generated.control_vertices);
    }

    #[test]
    fn redo_rebuilds_identical_geometry() {
        let mut scene = InMemoryScene::new();
        let mut command = parsed(&["-ncv", "8"]);
        command.create(&mut scene).expect("create");
        let first = command.generated().cloned().expect("gegenereerd");

        command.undo(&mut scene).expect("undo");
        command.redo(&mut scene).expect("redo");

        let second = command.generated().expect("gegenereerd");
        assert_eq!(&first, second);
        let stored = scene.curve(command.curve().expect("handle")).expect("curve");
        assert_eq!(stored.curve.control_points, first.control_vertices);
    }

    #[test]
    fn too_few_cvs_fails_without_touching_scene() {
        let mut scene = InMemoryScene::new();
        let mut command = parsed(&["-ncv", "3"]);

        let err = command.create(&mut scene).unwrap_err();
        assert!(matches!(err, CommandError::Construction { .. }));
        assert_eq!(command.state(), &CommandState::Failed);
        assert!(scene.is_empty());
        assert!(command.undo(&mut scene).is_err());
    }

    #[test]
    fn huge_cv_count_fails_without_touching_scene() {
        let mut scene = InMemoryScene::new();
        let mut command = parsed(&["-ncv", "4294967295"]);

        let err = command.create(&mut scene).unwrap_err();
        assert!(matches!(err, CommandError::Construction { .. }));
        assert_eq!(command.state(), &CommandState::Failed);
        assert!(command.generated().is_none());
        assert!(scene.is_empty());
    }

    #[test]
    fn bad_value_keeps_command_initial() {
        let db = syntax().parse(&["-r", "3", "-ncv", "-4"]).expect("parse");
        let mut command = HelixToolCommand::new();

        let err = command.parse_arguments(&db).unwrap_err();
        assert!(matches!(
            err,
            CommandError::Argument(ArgumentError::InvalidValue { flag: "numCVs", .. })
        ));
        assert_eq!(command.state(), &CommandState::Initial);
        assert_eq!(command.parameters(), &HelixParameters::default());
    }

    #[test]
    fn undo_reports_curve_deleted_elsewhere() {
        let mut scene = InMemoryScene::new();
        let mut command = parsed(&[]);
        command.create(&mut scene).expect("create");

        let transform = scene
            .owning_transform(command.curve().expect("handle"))
            .expect("transform");
        scene.delete_node(transform).expect("extern verwijderd");

        let err = command.undo(&mut scene).unwrap_err();
        assert!(matches!(err, CommandError::Deletion { .. }));
        assert_eq!(command.state().name(), "Created");
    }

    #[test]
    fn operations_out_of_order_are_rejected() {
        let mut scene = InMemoryScene::new();
        let mut command = HelixToolCommand::new();

        assert!(matches!(
            command.create(&mut scene),
            Err(CommandError::InvalidState { operation: "create", state: "Initial" })
        ));
        assert!(matches!(
            command.redo(&mut scene),
            Err(CommandError::InvalidState { operation: "redo", .. })
        ));
        assert!(matches!(
            command.finalize(),
            Err(CommandError::InvalidState { operation: "finalize", state: "Initial" })
        ));

        let mut command = parsed(&[]);
        let db = syntax().parse::<&str>(&[]).expect("parse");
        assert!(command.parse_arguments(&db).is_err());
    }

    #[test]
    fn finalize_twice_gives_same_record() {
        let mut scene = InMemoryScene::new();
        let mut command = parsed(&["-p", "0.5"]);
        command.create(&mut scene).expect("create");

        let first = command.finalize().expect("finalize");
        let second = command.finalize().expect("finalize");
        assert_eq!(first, second);
    }

    #[test]
    fn journal_record_parses_back_to_same_parameters() {
        let mut scene = InMemoryScene::new();
        let mut command = parsed(&["-radius", "1.5", "-pitch", "-0.125", "-numCVs", "7", "-upsideDown", "yes"]);
        command.create(&mut scene).expect("create");
        let record = command.finalize().expect("finalize");

        let tokens = tokenize(&record.to_string()).expect("tokens");
        assert_eq!(tokens[0], "helixToolCmd");
        let replay = parsed(&tokens[1..].iter().map(String::as_str).collect::<Vec<_>>());
        assert_eq!(replay.parameters(), command.parameters());
    }

    #[test]
    fn preset_parameters_skip_parsing() {
        let mut scene = InMemoryScene::new();
        let mut params = HelixParameters::default();
        params.set_cv_count(5);
        let mut command = HelixToolCommand::with_parameters(params);

        command.create(&mut scene).expect("create");
        assert_eq!(command.generated().map(|g| g.knots.len()), Some(7));
    }
}
