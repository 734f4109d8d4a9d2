//! Splitting a token sequence into sequenced sub-commands.

/// A sequencing operator between two sub-commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `;` - run the next command whatever happened to this one.
    Sequence,
    /// `&&` - run the next command only if this one succeeded.
    And,
}

impl Operator {
    /// Recognise an operator token, matching the whole word exactly.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            ";" => Some(Operator::Sequence),
            "&&" => Some(Operator::And),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Operator::Sequence => ";",
            Operator::And => "&&",
        }
    }

    /// The wait policy imposed on the sub-command this operator follows.
    pub fn wait_policy(self) -> WaitPolicy {
        match self {
            Operator::Sequence => WaitPolicy::DontWait,
            Operator::And => WaitPolicy::WaitAndRequireSuccess,
        }
    }
}

/// Whether the shell blocks on a sub-command and checks its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaitPolicy {
    /// Fire and forget; the outcome never affects the chain.
    #[default]
    DontWait,
    /// Block until the command finishes and stop the chain if it failed.
    WaitAndRequireSuccess,
}

/// One command name plus its arguments, borrowed from the line's tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubCommand<'a> {
    argv: &'a [String],
    operator: Option<Operator>,
}

impl<'a> SubCommand<'a> {
    /// Full argument vector, command name first. Never empty.
    pub fn argv(&self) -> &'a [String] {
        self.argv
    }

    pub fn name(&self) -> &'a str {
        &self.argv[0]
    }

    pub fn args(&self) -> &'a [String] {
        &self.argv[1..]
    }

    /// The operator that ended this sub-command, `None` at end of line.
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn policy(&self) -> WaitPolicy {
        self.operator.map(Operator::wait_policy).unwrap_or_default()
    }
}

/// Lazily walks a token sequence, yielding one [`SubCommand`] per segment.
///
/// Segments that would be empty (leading, trailing or doubled operators) are
/// skipped rather than reported, so `"; ls ;; pwd ;"` yields `ls` and `pwd`.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    remaining: &'a [String],
}

impl<'a> Chain<'a> {
    pub fn new(tokens: &'a [String]) -> Self {
        Self { remaining: tokens }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = SubCommand<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.remaining.is_empty() {
            let tokens = self.remaining;
            let boundary = tokens
                .iter()
                .enumerate()
                .find_map(|(idx, token)| Operator::parse(token).map(|op| (idx, op)));

            let (argv, operator) = match boundary {
                Some((idx, op)) => {
                    self.remaining = &tokens[idx + 1..];
                    (&tokens[..idx], Some(op))
                }
                None => {
                    self.remaining = &[];
                    (tokens, None)
                }
            };

            if !argv.is_empty() {
                return Some(SubCommand { argv, operator });
            }
        }

        None
    }
}
