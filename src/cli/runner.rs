use crate::{
    cli::Args,
    config::{Answers, Configuration},
    constants::STDIN_INDICATOR,
    error::Result,
    ioutils::read_from,
    pipeline::{Pipeline, Workspace},
    prompt::{collect_configuration, confirm_configuration, get_prompt_provider},
    scaffold::Report,
};

/// How a run ended when it did not fail.
#[derive(Debug)]
pub enum RunOutcome {
    /// The user declined the confirmation; nothing was touched.
    Cancelled,
    Completed(Report),
}

/// Main CLI runner that orchestrates the instantiation workflow
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Collects the configuration, asks for confirmation and runs the pipeline
    pub fn run(self) -> Result<RunOutcome> {
        let workspace = Workspace::with_driver(&self.args.root, &self.args.driver)?;

        if !self.args.non_interactive {
            println!("Stonecutter Mod Template Scaffolder");
            println!(
                "Note: this assumes the template files have not been modified. \
                 Running it on a fresh, unmodified template is recommended."
            );
        }

        let answers = self.load_answers()?;
        let configuration = self.resolve_configuration(answers)?;

        if !self.confirmed(&configuration)? {
            println!("Quitting.");
            return Ok(RunOutcome::Cancelled);
        }

        let mut report = Report::default();
        let result = Pipeline::new(&configuration).strict(self.args.strict).run_into(
            &workspace,
            &mut report,
            |stage| println!("{stage}"),
        );
        // Notices gathered before a failure still name the affected files.
        for diagnostic in report.diagnostics() {
            println!("Notice: {diagnostic}");
        }
        result?;

        log::info!(
            "{} file(s) rewritten, {} moved, {} director(ies) renamed, {} removed",
            report.files_rewritten,
            report.files_moved,
            report.dirs_renamed,
            report.files_removed
        );
        println!("All done!");
        Ok(RunOutcome::Completed(report))
    }

    /// Merges answers from `--answers-file` and `--answers`; inline answers win.
    fn load_answers(&self) -> Result<Answers> {
        let from_file = match &self.args.answers_file {
            Some(path) => Answers::from_file(path)?,
            None => Answers::default(),
        };

        let inline = match self.args.answers.as_deref() {
            Some(STDIN_INDICATOR) => Answers::parse(&read_from(std::io::stdin())?)?,
            Some(content) => Answers::parse(content)?,
            None => Answers::default(),
        };

        Ok(from_file.merge(inline))
    }

    fn resolve_configuration(&self, answers: Answers) -> Result<Configuration> {
        if self.args.non_interactive {
            answers.into_configuration()
        } else {
            collect_configuration(&get_prompt_provider(), answers)
        }
    }

    fn confirmed(&self, configuration: &Configuration) -> Result<bool> {
        if self.args.yes || self.args.non_interactive {
            println!("{configuration}");
            return Ok(true);
        }
        confirm_configuration(&get_prompt_provider(), configuration)
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<RunOutcome> {
    let runner = Runner::new(args);
    runner.run()
}
