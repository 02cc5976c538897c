//! The main REPL implementation.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;

use hestia_foundation::{Error, Result};

use crate::editor::{COMMAND_KEYWORDS, LineEditor, ReadResult, RustylineEditor};
use crate::session::{CommandOutcome, Session};

/// What evaluating one line produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Evaluation {
    /// Text to print (possibly empty).
    Output(String),
    /// The user asked to leave.
    Exit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (agent, parser, clock).
    session: Session,

    /// Whether to show the welcome banner and farewell.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E, session: Session) -> Self {
        Self {
            editor,
            session,
            show_banner: true,
            prompt: "Komut: ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop until EOF or an exit command.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? {}

        if self.show_banner {
            println!("Programdan çıkılıyor...");
        }
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => return Ok(true),
            ReadResult::Eof => return Ok(false),
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(true);
        }

        self.editor.add_history(trimmed);

        match self.eval(trimmed) {
            Ok(Evaluation::Exit) => return Ok(false),
            Ok(Evaluation::Output(text)) => {
                if !text.is_empty() {
                    println!("{text}");
                }
            }
            Err(e) => Self::print_error(&e),
        }

        self.refresh_keywords();
        Ok(true)
    }

    /// Evaluates one line of input.
    ///
    /// # Errors
    ///
    /// Returns an error if a command fails: malformed rule text, a rule
    /// file that cannot be loaded, or an inference overflow.
    pub fn eval(&mut self, input: &str) -> Result<Evaluation> {
        let input = input.trim();
        let (command, argument) = input
            .split_once(char::is_whitespace)
            .map_or((input, ""), |(c, a)| (c, a.trim()));

        let output = match command.to_lowercase().as_str() {
            "çıkış" | "exit" | "quit" if argument.is_empty() => return Ok(Evaluation::Exit),
            "durum" | "status" if argument.is_empty() => self.format_status(),
            "kurallar" | "rules" if argument.is_empty() => self.format_rules(),
            ":assert" => {
                self.session.assert_fact(argument)?;
                format!("+ {argument}")
            }
            ":retract" => {
                if self.session.retract_fact(argument) {
                    format!("- {argument}")
                } else {
                    format!("Gerçek bulunamadı: {argument}")
                }
            }
            ":rule" => {
                self.session.tell_rule(argument)?;
                format!("Kural eklendi: {argument}")
            }
            ":load" => {
                let count = self.session.load_rules(Path::new(argument))?;
                format!("{count} kural yüklendi: {argument}")
            }
            ":trace" => self.trace_command(argument),
            cmd if cmd.starts_with(':') => format!("Bilinmeyen komut: {command}"),
            _ => {
                let outcome = self.session.process_command(input)?;
                Self::format_outcome(&outcome)
            }
        };

        Ok(Evaluation::Output(output))
    }

    fn trace_command(&mut self, argument: &str) -> String {
        let mut words = argument.split_whitespace();
        match (words.next(), words.next()) {
            (Some("on"), None) => {
                self.session.tracer_mut().enable();
                "İzleme açık".to_string()
            }
            (Some("off"), None) => {
                self.session.tracer_mut().disable();
                "İzleme kapalı".to_string()
            }
            (Some("clear"), None) => {
                self.session.tracer_mut().clear();
                "İzleme kayıtları silindi".to_string()
            }
            (Some("json"), None) => {
                self.session.tracer_mut().set_json_format(true);
                "İzleme biçimi: json".to_string()
            }
            (Some("human"), None) => {
                self.session.tracer_mut().set_json_format(false);
                "İzleme biçimi: metin".to_string()
            }
            (Some("last"), count) => {
                let count = count.and_then(|n| n.parse().ok()).unwrap_or(20);
                let tracer = self.session.tracer();
                tracer.format_records(&tracer.buffer().recent(count))
            }
            _ => "Kullanım: :trace on|off|clear|json|human|last N".to_string(),
        }
    }

    fn format_status(&self) -> String {
        let mut out = format!("Cihaz Durumları:\n{}\n\nMevcut Gerçekler:", self.session.status());
        for fact in self.session.agent().snapshot_facts() {
            let _ = write!(out, "\n- {fact}");
        }
        out
    }

    fn format_rules(&self) -> String {
        let mut out = String::from("Mevcut Kurallar:");
        for (condition, action) in self.session.agent().snapshot_rules() {
            let _ = write!(out, "\n- EĞER {condition} İSE {action}");
        }
        out
    }

    fn format_outcome(outcome: &CommandOutcome) -> String {
        let mut lines = Vec::new();
        if let Some(emotion) = outcome.emotion() {
            lines.push(format!("Duygusal durumunuz anlaşıldı: {emotion}"));
        }
        if !outcome.understood() {
            lines.push(format!("Anlaşılamadı: {}", outcome.parse.normalized));
        }
        if let Some(temperature) = outcome.temperature {
            lines.push(format!("Isıtıcı sıcaklığı {temperature:.1}°C olarak ayarlandı"));
        }
        for (device, on) in &outcome.devices_changed {
            let state = if *on { "AÇIK" } else { "KAPALI" };
            lines.push(format!("{device}: {state}"));
        }
        lines.join("\n")
    }

    fn refresh_keywords(&mut self) {
        let mut keywords: Vec<String> = COMMAND_KEYWORDS.iter().map(|k| (*k).to_string()).collect();
        keywords.extend(self.session.agent().snapshot_facts());
        self.editor.set_keywords(keywords);
    }

    fn print_error(error: &Error) {
        match &error.context {
            Some(context) => eprintln!("\x1b[31mHata: {error} ({context})\x1b[0m"),
            None => eprintln!("\x1b[31mHata: {error}\x1b[0m"),
        }
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mAkıllı Ev Mantık Ajanı\x1b[0m");
        println!("{}", "=".repeat(50));
        println!("hestia v{}", env!("CARGO_PKG_VERSION"));
        println!("\nCihaz durumları:\n{}", self.session.status());
        println!("\nKomutları Türkçe olarak giriniz. 'çıkış' yazarak programdan çıkabilirsiniz.");
        println!("Meta komutlar: :assert, :retract, :rule, :load, :trace\n");

        let _ = io::stdout().flush();
    }
}
