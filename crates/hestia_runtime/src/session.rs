//! Session state for the REPL.
//!
//! The session owns one household agent, wired to the device dispatcher
//! and a tracer, together with the command parser and the clock that
//! drives time-of-day facts.

use std::path::Path;

use hestia_debug::{Tracer, TracerConfig};
use hestia_engine::{Agent, AgentConfig, Device, DeviceDispatcher, DeviceStatus, TimeOfDay};
use hestia_foundation::{ErrorContext, Fact, Result};
use hestia_language::RuleDecl;
use hestia_parser::{CommandParse, CommandParser, Emotion};

use crate::clock::{Clock, LocalClock};
use crate::rules::{parse_rules_source, read_rules_file};

/// The household agent a session drives.
pub type HomeAgent = Agent<DeviceDispatcher, Tracer>;

/// What a natural-language command did.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandOutcome {
    /// How the command was parsed.
    pub parse: CommandParse,
    /// Time of day the command ran at.
    pub time: TimeOfDay,
    /// Facts that were absent before the command and present after it.
    pub facts_added: Vec<Fact>,
    /// Devices whose state changed, with their new state.
    pub devices_changed: Vec<(Device, bool)>,
    /// New heater temperature, if the command adjusted it.
    pub temperature: Option<f64>,
}

impl CommandOutcome {
    /// Returns true if the command requested any fact.
    #[must_use]
    pub fn understood(&self) -> bool {
        self.parse.is_understood()
    }

    /// Returns the emotion detected in the command.
    #[must_use]
    pub fn emotion(&self) -> Option<Emotion> {
        self.parse.emotion
    }
}

/// Session state for an interactive or batch run.
pub struct Session {
    agent: HomeAgent,
    parser: CommandParser,
    clock: Box<dyn Clock>,
}

impl Session {
    /// Creates a session with a household agent seeded at the clock's
    /// current hour.
    ///
    /// # Errors
    /// Returns an error if a baseline rule fails under the configured
    /// condition grammar.
    pub fn new(config: AgentConfig, tracer: TracerConfig, clock: Box<dyn Clock>) -> Result<Self> {
        let agent = Agent::home(
            DeviceDispatcher::new(),
            Tracer::new(tracer),
            config,
            clock.hour(),
        )?;
        Ok(Self {
            agent,
            parser: CommandParser::new(),
            clock,
        })
    }

    /// Creates a session with default configuration and the local clock.
    ///
    /// # Errors
    /// See [`Session::new`].
    pub fn with_defaults() -> Result<Self> {
        Self::new(AgentConfig::new(), TracerConfig::new(), Box::new(LocalClock))
    }

    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------

    /// Processes a natural-language command.
    ///
    /// Refreshes the time-of-day fact, asserts the detected emotion's fact,
    /// asserts the requested fact, then applies any temperature change.
    ///
    /// # Errors
    /// Propagates inference overflow. Facts asserted before the overflow
    /// stay asserted.
    pub fn process_command(&mut self, text: &str) -> Result<CommandOutcome> {
        let parse = self.parser.parse(text);
        self.apply(parse)
    }

    /// Processes a command using the facts named in a classifier's reply,
    /// falling back to phrase matching when the reply names none.
    ///
    /// # Errors
    /// See [`Session::process_command`].
    pub fn process_classified(&mut self, text: &str, reply: &str) -> Result<CommandOutcome> {
        let parse = self.parser.parse_classified(text, reply);
        self.apply(parse)
    }

    fn apply(&mut self, parse: CommandParse) -> Result<CommandOutcome> {
        let time = self.agent.refresh_time_of_day(self.clock.hour())?;
        let facts_before = self.agent.facts().clone();
        let devices_before = self.status();

        if let Some(fact) = parse.emotion_fact() {
            self.agent.assert_fact(fact)?;
        }
        for fact in &parse.facts {
            self.agent.assert_fact(fact.clone())?;
        }
        let temperature = parse
            .temperature_delta
            .map(|delta| self.agent.dispatcher_mut().devices_mut().adjust_temperature(delta));

        let devices_after = self.status();
        let devices_changed = devices_before
            .devices
            .iter()
            .zip(&devices_after.devices)
            .filter(|(before, after)| before.1 != after.1)
            .map(|(_, after)| *after)
            .collect();

        Ok(CommandOutcome {
            facts_added: self.agent.facts().added_since(&facts_before),
            parse,
            time,
            devices_changed,
            temperature,
        })
    }

    // -------------------------------------------------------------------------
    // Facts and rules
    // -------------------------------------------------------------------------

    /// Asserts a fact directly and runs an inference pass.
    ///
    /// # Errors
    /// Propagates inference overflow.
    pub fn assert_fact(&mut self, name: &str) -> Result<()> {
        self.agent.assert_fact(name)
    }

    /// Retracts a fact. Returns true if it was present.
    pub fn retract_fact(&mut self, name: &str) -> bool {
        self.agent.retract_fact(name)
    }

    /// Adds a rule written as `condition -> action`.
    ///
    /// # Errors
    /// Returns an error if the rule text is malformed.
    pub fn tell_rule(&mut self, text: &str) -> Result<()> {
        self.agent.tell_rule(text)
    }

    /// Adds every rule in rule file source. Returns the number added.
    ///
    /// Every line is checked for rule shape before any rule is added. A
    /// condition the configured grammar rejects stops loading there, and
    /// the rules added before it are kept.
    ///
    /// # Errors
    /// Returns the first error, labeled with `name` and the line number.
    pub fn load_rules_source(&mut self, source: &str, name: &str) -> Result<usize> {
        let rules = parse_rules_source(source, name)?;
        self.add_rules(rules, name)
    }

    /// Adds every rule in a rule file. Returns the number added.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read, or the first rule
    /// error labeled with the file name and line number.
    pub fn load_rules(&mut self, path: &Path) -> Result<usize> {
        let rules = read_rules_file(path)?;
        self.add_rules(rules, &path.display().to_string())
    }

    fn add_rules(&mut self, rules: Vec<(usize, RuleDecl)>, name: &str) -> Result<usize> {
        let count = rules.len();
        for (line, decl) in rules {
            self.agent
                .add_rule(&decl.condition_text, &decl.action_id)
                .map_err(|e| {
                    e.with_context(ErrorContext::new().with_source(name).with_line(line))
                })?;
        }
        Ok(count)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Returns the device status.
    #[must_use]
    pub fn status(&self) -> DeviceStatus {
        self.agent.dispatcher().devices().status()
    }

    /// Returns the agent.
    #[must_use]
    pub fn agent(&self) -> &HomeAgent {
        &self.agent
    }

    /// Returns mutable access to the agent.
    pub fn agent_mut(&mut self) -> &mut HomeAgent {
        &mut self.agent
    }

    /// Returns the tracer.
    #[must_use]
    pub fn tracer(&self) -> &Tracer {
        self.agent.observer()
    }

    /// Returns mutable access to the tracer.
    pub fn tracer_mut(&mut self) -> &mut Tracer {
        self.agent.observer_mut()
    }

    /// Returns the command parser.
    #[must_use]
    pub fn parser(&self) -> &CommandParser {
        &self.parser
    }

    /// Returns mutable access to the command parser.
    pub fn parser_mut(&mut self) -> &mut CommandParser {
        &mut self.parser
    }
}
