#[cfg(target_arch = "wasm32")]
fn main() {
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    if let Err(err) = native::run() {
        eprintln!("helix_cli error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use helix_tool::command::Dispatcher;
    use helix_tool::config::EngineOptions;
    use helix_tool::scene::InMemoryScene;
    use helix_tool::{CurveExport, export_curves};
    use std::fs::{self, File};
    use std::io::{BufWriter, Write};
    use std::path::{Path, PathBuf};

    const USAGE: &str = r#"helix_cli (helix-tool)

USAGE:
  helix_cli run "<command line>" [options]
  helix_cli replay <script> [options]
  helix_cli help

EXAMPLES:
  helix_cli run "helixToolCmd -r 5 -p 1 -ncv 10 -ud true"
  helix_cli replay journal.mel --obj helix.obj

OPTIONS:
  --obj <path>       Write the resulting curves as OBJ polylines
  --samples <n>      Preview segments per span (default 8)
  --overwrite        Overwrite an existing OBJ file
  -h, --help         Show this help
"#;

    pub fn run() -> Result<(), String> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let mut args = Args::new(args);

        let Some(command) = args.next() else {
            print_usage();
            return Ok(());
        };

        match command.as_str() {
            "run" => {
                let line = args.next().ok_or("missing command line")?;
                let options = Options::parse(&mut args)?;
                execute_lines(std::iter::once(line.as_str()), &options)
            }
            "replay" => {
                let script = args.next().ok_or("missing script path")?;
                let options = Options::parse(&mut args)?;
                let text = fs::read_to_string(&script).map_err(|e| format!("read {script}: {e}"))?;
                execute_lines(script_lines(&text), &options)
            }
            "-h" | "--help" | "help" => {
                print_usage();
                Ok(())
            }
            other => Err(format!("unknown command `{other}`\n\n{USAGE}")),
        }
    }

    fn print_usage() {
        println!("{USAGE}");
    }

    struct Options {
        obj_path: Option<PathBuf>,
        samples: usize,
        overwrite: bool,
    }

    impl Options {
        fn parse(args: &mut Args) -> Result<Self, String> {
            let mut options = Self {
                obj_path: None,
                samples: EngineOptions::DEFAULT_PREVIEW_SAMPLES_PER_SPAN,
                overwrite: false,
            };

            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--obj" => options.obj_path = Some(PathBuf::from(args.value("--obj")?)),
                    "--samples" => {
                        let value = args.value("--samples")?;
                        options.samples = value
                            .parse()
                            .map_err(|_| format!("invalid --samples value `{value}`"))?;
                    }
                    "--overwrite" => options.overwrite = true,
                    "-h" | "--help" => {
                        print_usage();
                        std::process::exit(0);
                    }
                    other => return Err(format!("unknown option `{other}`\n\n{USAGE}")),
                }
            }

            Ok(options)
        }
    }

    /// Lines of a journal script, without blank lines and `//` comments.
    fn script_lines(text: &str) -> impl Iterator<Item = &str> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with("//"))
    }

    fn execute_lines<'a>(
        lines: impl Iterator<Item = &'a str>,
        options: &Options,
    ) -> Result<(), String> {
        let mut scene = InMemoryScene::new();
        let mut dispatcher = Dispatcher::default();

        for (index, line) in lines.enumerate() {
            let record = dispatcher
                .execute(line, &mut scene)
                .map_err(|e| format!("line {}: {e}", index + 1))?;
            eprintln!("ok: {record}");
        }

        let curves = export_curves(&scene, options.samples);
        for curve in &curves {
            print_curve(curve);
        }

        println!("// journal");
        print!("{}", dispatcher.journal().to_script());

        if let Some(path) = options.obj_path.as_deref() {
            write_obj_file(path, &curves, options.overwrite)?;
            eprintln!("wrote {}", path.display());
        }

        Ok(())
    }

    fn print_curve(curve: &CurveExport) {
        println!(
            "{} (id {}): degree {}, {} control vertices, {} knots",
            curve.name,
            curve.id,
            curve.degree,
            curve.control_points.len(),
            curve.knots.len()
        );
        for (i, p) in curve.control_points.iter().enumerate() {
            println!("  cv[{i}] = ({:.6}, {:.6}, {:.6})", p.x, p.y, p.z);
        }
        let knots: Vec<String> = curve.knots.iter().map(ToString::to_string).collect();
        println!("  knots = [{}]", knots.join(", "));
    }

    fn write_obj_file(path: &Path, curves: &[CurveExport], overwrite: bool) -> Result<(), String> {
        if path.exists() && !overwrite {
            return Err(format!(
                "refusing to overwrite existing file {} (use --overwrite)",
                path.display()
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| format!("create dir {}: {e}", parent.display()))?;
        }

        let file = File::create(path).map_err(|e| format!("create {}: {e}", path.display()))?;
        let mut w = BufWriter::new(file);

        writeln!(w, "# helix-tool helix_cli").map_err(|e| format!("write obj: {e}"))?;

        let mut offset = 1usize;
        for curve in curves {
            writeln!(w, "o {}", curve.name).map_err(|e| format!("write obj: {e}"))?;
            for p in &curve.preview {
                writeln!(w, "v {} {} {}", p.x, p.y, p.z).map_err(|e| format!("write obj: {e}"))?;
            }

            let indices: Vec<String> = (offset..offset + curve.preview.len())
                .map(|i| i.to_string())
                .collect();
            if indices.len() > 1 {
                writeln!(w, "l {}", indices.join(" ")).map_err(|e| format!("write obj: {e}"))?;
            }
            offset += curve.preview.len();
        }

        w.flush().map_err(|e| format!("write obj: {e}"))
    }

    struct Args {
        args: Vec<String>,
        pos: usize,
    }

    impl Args {
        fn new(args: Vec<String>) -> Self {
            Self { args, pos: 0 }
        }

        fn next(&mut self) -> Option<String> {
            let arg = self.args.get(self.pos)?.clone();
            self.pos += 1;
            Some(arg)
        }

        fn value(&mut self, flag: &str) -> Result<String, String> {
            self.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        }
    }
}
