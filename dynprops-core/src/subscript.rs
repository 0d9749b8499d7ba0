//! Access requests.
//!
//! A [`Subscript`] describes one access operation as an ordered sequence of
//! [`Step`]s: `obj.a(2){0}` is `[Member("a"), Index([2]), CellIndex([0])]`.
//! Requests are built by the caller, consumed immediately by the
//! interceptor, and never stored.

use std::fmt;

/// The kind tag of a [`Step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// `.name`
    Member,
    /// `(i, ...)`
    Index,
    /// `{i, ...}`
    CellIndex,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StepKind::Member => "member",
            StepKind::Index => "index",
            StepKind::CellIndex => "cell-index",
        })
    }
}

/// One subscript step.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// Field access by name.
    Member(String),
    /// Zero-based element selection.
    Index(Vec<usize>),
    /// Zero-based cell content selection.
    CellIndex(Vec<usize>),
}

impl Step {
    /// The kind tag of this step.
    pub const fn kind(&self) -> StepKind {
        match self {
            Step::Member(_) => StepKind::Member,
            Step::Index(_) => StepKind::Index,
            Step::CellIndex(_) => StepKind::CellIndex,
        }
    }

    /// The member name, if this is a member step.
    pub fn member(&self) -> Option<&str> {
        match self {
            Step::Member(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join(f: &mut fmt::Formatter<'_>, indices: &[usize]) -> fmt::Result {
            for (i, index) in indices.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{index}")?;
            }
            Ok(())
        }

        match self {
            Step::Member(name) => write!(f, ".{name}"),
            Step::Index(indices) => {
                f.write_str("(")?;
                join(f, indices)?;
                f.write_str(")")
            }
            Step::CellIndex(indices) => {
                f.write_str("{")?;
                join(f, indices)?;
                f.write_str("}")
            }
        }
    }
}

/// An ordered sequence of subscript steps.
///
/// A bare name converts into a single member step:
///
/// ```rust,ignore
/// let request: Subscript = "speed".into();
/// assert_eq!(request.steps(), &[Step::Member("speed".into())]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Subscript {
    steps: Vec<Step>,
}

impl Subscript {
    /// An empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// A request that starts with `.name`.
    pub fn member(name: impl Into<String>) -> Self {
        Self {
            steps: vec![Step::Member(name.into())],
        }
    }

    /// Append `.name`.
    pub fn dot(mut self, name: impl Into<String>) -> Self {
        self.steps.push(Step::Member(name.into()));
        self
    }

    /// Append `(index)`.
    pub fn index(mut self, index: usize) -> Self {
        self.steps.push(Step::Index(vec![index]));
        self
    }

    /// Append `{index}`.
    pub fn cell(mut self, index: usize) -> Self {
        self.steps.push(Step::CellIndex(vec![index]));
        self
    }

    /// Append an arbitrary step.
    pub fn push(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Insert `step` ahead of all existing steps.
    pub fn prepend(mut self, step: Step) -> Self {
        self.steps.insert(0, step);
        self
    }

    /// Returns `true` if the request has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// The first step, if any.
    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }

    /// All steps in order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Take the steps.
    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

impl fmt::Display for Subscript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

impl From<&str> for Subscript {
    fn from(name: &str) -> Self {
        if name.is_empty() {
            Self::new()
        } else {
            Self::member(name)
        }
    }
}

impl From<String> for Subscript {
    fn from(name: String) -> Self {
        Subscript::from(name.as_str())
    }
}

impl From<&String> for Subscript {
    fn from(name: &String) -> Self {
        Subscript::from(name.as_str())
    }
}

impl From<Step> for Subscript {
    fn from(step: Step) -> Self {
        Self { steps: vec![step] }
    }
}

impl From<Vec<Step>> for Subscript {
    fn from(steps: Vec<Step>) -> Self {
        Self { steps }
    }
}

impl From<&Subscript> for Subscript {
    fn from(request: &Subscript) -> Self {
        request.clone()
    }
}

impl IntoIterator for Subscript {
    type Item = Step;
    type IntoIter = std::vec::IntoIter<Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a> IntoIterator for &'a Subscript {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
