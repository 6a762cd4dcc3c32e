//! Tag boundary tracking over newest-first history.
//!
//! History is read newest first and a release is only recognised when a
//! commit's ref decoration carries its tag. The tracker therefore opens a
//! section at each new tag boundary and keeps collecting the commits that
//! follow (the tagged commit and older ones) until the next, older boundary
//! closes it.

use crate::classifier::Classifier;
use crate::domain::{LogEntry, VersionTag};
use crate::render::{render_group, render_note, render_section_header, CommitGroup};

/// Tag at which the versioning scheme started, and the note closing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartMarker {
    pub tag: String,
    pub note: String,
}

impl StartMarker {
    pub fn new(tag: impl Into<String>, note: impl Into<String>) -> Self {
        StartMarker {
            tag: tag.into(),
            note: note.into(),
        }
    }
}

impl Default for StartMarker {
    fn default() -> Self {
        StartMarker::new("0.0.1-beta", "Start of J.Assy versioning system")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerState {
    /// No section is open; commits are ignored until a new tag shows up
    AwaitingBoundary,
    /// A section header was written and commits are collected under it
    Accumulating,
    /// The start marker was reached; nothing older is processed
    Terminated,
}

/// Whether the caller should keep feeding entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Stop,
}

/// Rendered sections produced from one history walk
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Assembly {
    /// Markdown for every emitted section, newest first
    pub body: String,
    /// Tags that got a section, in output order
    pub sections: Vec<VersionTag>,
    pub reached_start_marker: bool,
}

pub struct TagBoundaryTracker<'a> {
    classifier: &'a Classifier,
    present_tags: &'a [VersionTag],
    greatest_present: Option<&'a VersionTag>,
    force: bool,
    start_marker: StartMarker,
    state: TrackerState,
    group: CommitGroup,
    output: String,
    sections: Vec<VersionTag>,
}

impl<'a> TagBoundaryTracker<'a> {
    /// # Arguments
    /// * `classifier` - Classifier applied to every commit subject
    /// * `present_tags` - Tags already recorded in the target document
    /// * `force` - Emit a section for every tag, recorded or not
    /// * `start_marker` - Tag whose section ends the walk
    pub fn new(
        classifier: &'a Classifier,
        present_tags: &'a [VersionTag],
        force: bool,
        start_marker: StartMarker,
    ) -> Self {
        TagBoundaryTracker {
            classifier,
            present_tags,
            greatest_present: present_tags.iter().max(),
            force,
            start_marker,
            state: TrackerState::AwaitingBoundary,
            group: CommitGroup::new(),
            output: String::new(),
            sections: Vec::new(),
        }
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    /// A tag is new when it is not recorded yet and sorts above every recorded tag.
    pub fn is_new_tag(&self, tag: &VersionTag) -> bool {
        let tag_exists = self.present_tags.contains(tag);
        !tag_exists && self.greatest_present.map_or(true, |greatest| tag > greatest)
    }

    /// Feed the next (older) history entry.
    pub fn process(&mut self, entry: &LogEntry) -> Step {
        if self.state == TrackerState::Terminated {
            return Step::Stop;
        }

        if let Some(tag) = entry.tag() {
            let is_new = self.is_new_tag(&tag);
            tracing::debug!(tag = %tag, is_new, force = self.force, "tag boundary");

            self.flush();
            self.group = CommitGroup::new();

            if is_new || self.force {
                tracing::info!(tag = %tag, date = %entry.date, "opening changelog section");
                self.output
                    .push_str(&render_section_header(&tag, &entry.date));
                self.sections.push(tag);
                self.state = TrackerState::Accumulating;
            }

            if self.output.contains(self.start_marker.tag.as_str()) {
                tracing::info!(marker = %self.start_marker.tag, "start of versioning reached");
                self.output
                    .push_str(&render_note(&format!("**{}**", self.start_marker.note)));
                self.state = TrackerState::Terminated;
                return Step::Stop;
            }
        }

        if self.state == TrackerState::Accumulating {
            let category = self.classifier.classify(&entry.message);
            tracing::trace!(%category, message = %entry.message, "classified commit");
            self.group.push(category, entry.message.clone());
        }

        Step::Continue
    }

    /// Render the open section body, if any, and close it.
    fn flush(&mut self) {
        if self.state != TrackerState::Accumulating {
            return;
        }
        self.output.push_str(&render_group(&self.group));
        self.group = CommitGroup::new();
        self.state = TrackerState::AwaitingBoundary;
    }

    /// Finish the walk. A section still open when history runs out gets
    /// the commits collected so far.
    pub fn finish(mut self) -> Assembly {
        let reached_start_marker = self.state == TrackerState::Terminated;
        if self.state == TrackerState::Accumulating {
            tracing::debug!(commits = self.group.len(), "flushing trailing group");
        }
        self.flush();

        Assembly {
            body: self.output,
            sections: self.sections,
            reached_start_marker,
        }
    }
}

/// Run a tracker over newest-first entries until history or the start marker ends it.
pub fn assemble<'e, I>(
    entries: I,
    classifier: &Classifier,
    present_tags: &[VersionTag],
    force: bool,
    start_marker: StartMarker,
) -> Assembly
where
    I: IntoIterator<Item = &'e LogEntry>,
{
    let mut tracker = TagBoundaryTracker::new(classifier, present_tags, force, start_marker);
    for entry in entries {
        if tracker.process(entry) == Step::Stop {
            break;
        }
    }
    tracker.finish()
}
