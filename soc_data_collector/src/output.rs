//! Writes the collections and copies the sprite sheets they reference.

use std::collections::HashSet;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use crate::config::CollectorConfig;
use crate::context;

#[derive(Debug)]
pub struct CollectionWriter {
    collections: PathBuf,
    public: PathBuf,
    images: PathBuf,
    minimize: bool,
    copy_images: bool,
    copied: HashSet<PathBuf>,
}

impl CollectionWriter {
    /// Creates the writer and its collection directory.
    pub fn new(config: &CollectorConfig) -> Result<Self> {
        let collections = config.paths.collections.clone();
        context!(fs::create_dir_all(&collections); "cannot create collection dir {}", collections.display())?;

        Ok(Self {
            collections,
            public: config.paths.public.clone(),
            images: config.paths.images.clone(),
            minimize: config.output.minimize,
            copy_images: config.output.copy_images,
            copied: HashSet::new(),
        })
    }

    /// Writes `records` to `{name}.json` in the collection directory.
    pub fn write<T: Serialize + ?Sized>(&self, name: &str, records: &T) -> Result<()> {
        let path = self.collections.join(format!("{name}.json"));
        let f = context!(fs::File::create(&path); "cannot create {}", path.display())?;
        let mut writer = BufWriter::new(&f);

        if self.minimize {
            context!(serde_json::to_writer(&mut writer, records); "cannot write {name}")?;
        } else {
            context!(serde_json::to_writer_pretty(&mut writer, records); "cannot write {name}")?;
        }

        context!(writer.flush(); "cannot write {name}")?;
        drop(writer);

        log::info!("Written {name} ({} bytes).", f.metadata()?.len());
        Ok(())
    }

    /// Copies a sprite sheet into the `category` asset directory.
    ///
    /// Each target file is copied at most once per run.
    pub fn copy_image(&mut self, sprite_sheet: &str, category: &str) -> Result<()> {
        if !self.copy_images {
            return Ok(());
        }

        let target_dir = self.public.join(category);
        let target = target_dir.join(sprite_sheet);
        if self.copied.contains(&target) {
            log::trace!("Already copied {}.", target.display());
            return Ok(());
        }

        let source = self.images.join(sprite_sheet);
        context!(fs::create_dir_all(&target_dir); "cannot create asset dir {}", target_dir.display())?;
        context!(fs::copy(&source, &target); "cannot copy {} to {}", source.display(), target.display())?;

        self.copied.insert(target);
        Ok(())
    }

    /// The number of distinct asset files copied so far.
    pub fn copied(&self) -> usize {
        self.copied.len()
    }
}
