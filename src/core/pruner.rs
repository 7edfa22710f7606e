/// Subtree extraction pipeline: read, link, locate, write

use crate::bio::taxonomy::{ForestBuilder, RecordFormat, RecordReader, SubtreeWriter, TaxonId};
use crate::core::config::Config;
use crate::{Result, TaxopruneError};
use std::collections::HashSet;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Records between progress callback invocations
const CALLBACK_TICK: u64 = 10_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneSummary {
    pub records_read: u64,
    pub distinct_ids: usize,
    pub duplicate_names: usize,
    pub orphans: usize,
    pub descendants_written: u64,
}

pub struct SubtreePruner {
    config: Config,
    format: RecordFormat,
    progress_callback: Option<Box<dyn Fn(u64) + Send + Sync>>,
}

struct LoadedDump {
    builder: ForestBuilder,
    /// Id of the first record carrying the target name
    root_id: Option<TaxonId>,
    records_read: u64,
}

impl SubtreePruner {
    pub fn new(config: Config) -> Self {
        let format = config.reader.default_format;
        Self {
            config,
            format,
            progress_callback: None,
        }
    }

    pub fn with_format(mut self, format: RecordFormat) -> Self {
        self.format = format;
        self
    }

    /// Called with the running record count while the dump is read
    pub fn with_progress_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(u64) + Send + Sync + 'static,
    {
        self.progress_callback = Some(Box::new(callback));
        self
    }

    pub fn format(&self) -> RecordFormat {
        self.format
    }

    /// Extract the subtree under the first taxon named `taxon`.
    ///
    /// The whole dump is read before anything is written, and nothing reaches
    /// `output` unless the taxon exists and has at least one child.
    pub fn prune<R: BufRead, W: Write>(
        &self,
        input: R,
        taxon: &str,
        output: W,
    ) -> Result<PruneSummary> {
        let loaded = self.load(input, taxon)?;
        let mut summary = PruneSummary {
            records_read: loaded.records_read,
            distinct_ids: loaded.builder.len(),
            ..Default::default()
        };
        info!(
            "Read {} records ({} distinct ids)",
            summary.records_read, summary.distinct_ids
        );

        summary.duplicate_names = count_duplicate_names(&loaded.builder);
        info!("{} non unique names", summary.duplicate_names);

        let root_id = loaded
            .root_id
            .ok_or_else(|| TaxopruneError::TaxonNotFound(taxon.to_string()))?;

        let (forest, report) = loaded.builder.link();
        // A later record with the same id replaces the matched one
        let root = forest
            .get(root_id)
            .ok_or_else(|| TaxopruneError::TaxonNotFound(taxon.to_string()))?;
        summary.orphans = report.orphans;
        if report.orphans > 0 {
            warn!("{} taxa reference a parent missing from the dump", report.orphans);
        }

        if forest.children(root).is_empty() {
            return Err(TaxopruneError::ChildlessTaxon(taxon.to_string()));
        }

        let mut writer = SubtreeWriter::new(output);
        summary.descendants_written = writer.write_subtree(&forest, root)?;
        writer.flush()?;

        info!("{} taxonomic names written", summary.descendants_written);
        Ok(summary)
    }

    fn load<R: BufRead>(&self, input: R, taxon: &str) -> Result<LoadedDump> {
        let mut reader = RecordReader::new(input, self.format)
            .with_progress_interval(self.config.reader.progress_interval);
        let mut builder = ForestBuilder::new();
        let mut root_id = None;

        while let Some(record) = reader.next_record()? {
            if root_id.is_none() && record.name == taxon {
                debug!("Found \"{}\" on line {}", taxon, reader.line_number());
                root_id = Some(record.id);
            }
            builder.insert(record);

            if let Some(ref callback) = self.progress_callback {
                if reader.records_read() % CALLBACK_TICK == 0 {
                    callback(reader.records_read());
                }
            }
        }

        Ok(LoadedDump {
            builder,
            root_id,
            records_read: reader.records_read(),
        })
    }
}

/// Count names carried by more than one record (replaced records included).
fn count_duplicate_names(builder: &ForestBuilder) -> usize {
    let mut seen = HashSet::with_capacity(builder.len());
    let mut duplicates = HashSet::new();
    for record in builder.records() {
        if !seen.insert(record.name.as_str()) {
            duplicates.insert(record.name.as_str());
        }
    }

    if !duplicates.is_empty() && tracing::enabled!(tracing::Level::DEBUG) {
        let mut names: Vec<_> = duplicates.iter().copied().collect();
        names.sort_unstable();
        debug!("Non unique names: {}", names.join("; "));
    }
    duplicates.len()
}
