use std::cell::RefCell;
use std::rc::Rc;

use crate::{parse_field, AxisBounds, Error, LineConfiguration, MaxImpedance};
use crate::catalog::{Catalog, CatalogStore, KeyValueStore, RlgcSet};
use crate::impedance::{complex, ImpedanceProfile, RlgcParameters};
use crate::sync::{self, CatalogAuthority, CatalogView, SharedStore, ViewSynchronizer};
use crate::views::{ListView, Prompt};

/// Text of the editable RLGC fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RlgcForm {
    pub name: String,
    pub r: String,
    pub l: String,
    pub g: String,
    pub c: String,
}

impl RlgcForm {
    pub fn fill(&mut self, set: &RlgcSet) {
        self.name = set.name.clone();
        self.r = set.params.r.to_string();
        self.l = set.params.l.to_string();
        self.g = set.params.g.to_string();
        self.c = set.params.c.to_string();
    }

    /// Parameters for computation. A field that does not parse takes the
    /// value of `stored`.
    pub fn params(&self, stored: &RlgcParameters) -> RlgcParameters {
        RlgcParameters {
            r: parse_field(&self.r, stored.r),
            l: parse_field(&self.l, stored.l),
            g: parse_field(&self.g, stored.g),
            c: parse_field(&self.c, stored.c),
        }
    }

    /// The set to save. Every field is required.
    pub fn to_set(&self) -> Result<RlgcSet, Error> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::Validation { field: "name" });
        }
        Ok(RlgcSet::new(
            name,
            required(&self.r, "r")?,
            required(&self.l, "l")?,
            required(&self.g, "g")?,
            required(&self.c, "c")?,
        ))
    }
}

fn required(text: &str, field: &'static str) -> Result<f64, Error> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Error::Validation { field }),
    }
}

/// Text of the line and display fields.
#[derive(Clone, Debug, PartialEq)]
pub struct LineInputs {
    pub frequency: String,
    pub line_length: String,
    pub load_magnitude: String,
    pub load_phase: String,
    pub max_impedance: String,
    pub autoscale: bool,
}

impl Default for LineInputs {
    fn default() -> Self {
        Self {
            frequency: String::new(),
            line_length: String::new(),
            load_magnitude: String::new(),
            load_phase: String::new(),
            max_impedance: String::new(),
            autoscale: true,
        }
    }
}

impl LineInputs {
    /// Parses the fields; anything that does not parse counts as `0`.
    pub fn configuration(&self) -> LineConfiguration {
        LineConfiguration {
            frequency: parse_field(&self.frequency, 0.0),
            line_length: parse_field(&self.line_length, 0.0),
            load_magnitude: parse_field(&self.load_magnitude, 0.0),
            load_phase: parse_field(&self.load_phase, 0.0),
            max_impedance: if self.autoscale {
                MaxImpedance::Auto
            } else {
                MaxImpedance::Fixed(self.max_impedance.clone())
            },
            ..LineConfiguration::default()
        }
    }
}

/// Everything the calculator surface shows after a recomputation.
#[derive(Debug)]
pub struct MainRender {
    /// Selector entries, in catalog order.
    pub names: Vec<String>,
    pub selected: usize,
    pub profile: ImpedanceProfile,
    pub bounds: AxisBounds,
    /// Set when the display bound had to be replaced.
    pub warning: Option<Error>,
}

impl MainRender {
    pub fn z0_polar(&self) -> String {
        self.profile.z0_polar().to_string()
    }

    pub fn z0_rectangular(&self) -> String {
        complex::rectangular(self.profile.z0)
    }

    pub fn z_in_polar(&self) -> String {
        self.profile.z_in_polar().to_string()
    }

    pub fn z_in_rectangular(&self) -> String {
        complex::rectangular(self.profile.z_in())
    }

    pub fn attenuation(&self) -> String {
        format!("{:.3} dB/km", self.profile.attenuation_db())
    }

    pub fn beta(&self) -> String {
        format!("{:.3}", self.profile.beta_degrees())
    }

    /// Plot series as `(position, |Z_in|)`.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.profile.samples().collect()
    }
}

/// The calculator surface. It owns the authoritative catalog store.
pub struct MainView<K: KeyValueStore> {
    store: SharedStore<K>,
    selected: usize,
    pub form: RlgcForm,
    pub inputs: LineInputs,
    render: Option<MainRender>,
    seen_revision: Option<u64>,
}

impl<K: KeyValueStore> MainView<K> {
    /// Opens the calculator over `store`, seeding the default set if the
    /// catalog is empty, and selects the first entry.
    pub fn open(store: CatalogStore<K>, inputs: LineInputs) -> Result<Self, Error> {
        let mut view = Self {
            store: Rc::new(RefCell::new(store)),
            selected: 0,
            form: RlgcForm::default(),
            inputs,
            render: None,
            seen_revision: None,
        };
        view.reload()?;
        Ok(view)
    }

    pub fn authority(&self) -> CatalogAuthority<K> {
        CatalogAuthority::new(&self.store)
    }

    pub fn synchronizer(&self) -> ViewSynchronizer<K> {
        ViewSynchronizer::new(self.authority())
    }

    /// Opens a catalog list surface bound to this view's store.
    pub fn open_list(&self) -> Result<ListView<K>, Error> {
        ListView::open(self.authority())
    }

    pub fn catalog(&self) -> Result<Catalog, Error> {
        self.store.borrow().load()
    }

    #[inline]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Result of the last successful recomputation.
    pub fn render(&self) -> Option<&MainRender> {
        self.render.as_ref()
    }

    /// Selects the set at `index`, copies it into the form and recomputes.
    pub fn select(&mut self, index: usize) -> Result<&MainRender, Error> {
        let catalog = self.catalog()?;
        self.form.fill(catalog.at(index)?);
        self.selected = index;
        self.compute()
    }

    /// Recomputes the profile from the current fields.
    ///
    /// If the catalog was changed through another surface since the last
    /// render, the view reloads first and the form is refilled from the
    /// selected set.
    pub fn recalculate(&mut self) -> Result<&MainRender, Error> {
        self.refresh_if_stale()?;
        self.compute()
    }

    fn refresh_if_stale(&mut self) -> Result<(), Error> {
        let revision = self.store.borrow().revision();
        if self.seen_revision != Some(revision) {
            tracing::debug!(seen = ?self.seen_revision, revision, "catalog changed elsewhere, reloading");
            self.reload()?;
        }
        Ok(())
    }

    fn compute(&mut self) -> Result<&MainRender, Error> {
        let catalog = self.catalog()?;
        let stored = catalog.at(self.selected)?.params;

        let config = self.inputs.configuration();
        let profile = ImpedanceProfile::compute(config.sweep(self.form.params(&stored)))?;
        let (bounds, warning) = AxisBounds::resolve(profile.line_length, &config.max_impedance);

        self.seen_revision = Some(self.store.borrow().revision());
        Ok(self.render.insert(MainRender {
            names: catalog.iter().map(|set| set.name.clone()).collect(),
            selected: self.selected,
            profile,
            bounds,
            warning,
        }))
    }

    /// Saves the form as a catalog set, asking before overwriting a set of
    /// the same name. Returns the index of the saved set, or `None` if the
    /// overwrite was declined.
    pub fn save_form<P: Prompt>(&mut self, prompt: &mut P) -> Result<Option<usize>, Error> {
        let set = match self.form.to_set() {
            Ok(set) => set,
            Err(err) => {
                prompt.alert(&err.to_string());
                return Err(err);
            }
        };

        let saved = self.store.borrow_mut().upsert(set, |existing| {
            prompt.confirm(&format!(
                "RLGC set \"{}\" already exists. Overwrite it?",
                existing.name
            ))
        })?;

        if let Some(index) = saved {
            self.select(index)?;
            prompt.alert("RLGC set saved.");
        }
        Ok(saved)
    }

    /// Deletes the selected set after confirmation, then selects the entry
    /// before it. Returns whether anything was deleted.
    pub fn delete_selected<P: Prompt>(&mut self, prompt: &mut P) -> Result<bool, Error> {
        self.refresh_if_stale()?;
        let catalog = self.catalog()?;
        let name = catalog.at(self.selected)?.name.clone();
        let confirmed = prompt.confirm(&format!("Delete RLGC set \"{name}\"?"));

        let catalog = self.store.borrow_mut().delete_at(self.selected, confirmed)?;
        if !confirmed {
            return Ok(false);
        }

        let previous = self.selected.saturating_sub(1);
        self.select(sync::revalidate_selection(previous, catalog.len()))?;
        prompt.alert("RLGC set deleted.");
        Ok(true)
    }
}

impl<K: KeyValueStore> CatalogView for MainView<K> {
    fn seen_revision(&self) -> Option<u64> {
        self.seen_revision
    }

    /// Re-reads the catalog and recomputes from the selected set. The set
    /// shown before follows its new index; if it is gone, the index is kept
    /// when still in range.
    fn reload(&mut self) -> Result<(), Error> {
        let catalog = sync::load_non_empty(&self.store)?;
        let shown = self
            .render
            .as_ref()
            .and_then(|render| render.names.get(render.selected))
            .and_then(|name| catalog.position(name));
        let selected = match shown {
            Some(index) => index,
            None => sync::revalidate_selection(self.selected, catalog.len()),
        };
        self.select(selected)?;
        Ok(())
    }
}
