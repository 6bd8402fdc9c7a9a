//! Writes impedance profiles to HDF5 for external plotting.
//!
//! Each profile becomes one group holding `positions`, `magnitudes`,
//! `z_in_re` and `z_in_im` datasets plus `frequency`, `z0_re`, `z0_im`,
//! `alpha` and `beta` attributes.

use std::path::Path;

use crate::{Error, LineConfiguration};
use crate::catalog::{CatalogStore, KeyValueStore};
use crate::impedance::ImpedanceProfile;

/// How profiles should be saved to file.
#[derive(Debug)]
pub struct SaveSettings<P: AsRef<Path>> {
    /// The path to the save file.
    pub filename: P,
    /// Start a new file instead of adding groups to an existing one.
    pub overwrite: bool,
}

/// Describes an export run.
pub struct ExportDescriptor<'a, P: AsRef<Path>> {
    /// Named profiles to write, one group each.
    pub profiles: &'a [(String, ImpedanceProfile)],
    pub save_settings: SaveSettings<P>,
    /// Whether or not to show progress on the console.
    pub verbose: bool,
}

/// Writes every profile of `desc`. A group that already exists under the
/// same name is replaced.
pub fn save_profiles<P: AsRef<Path>>(desc: ExportDescriptor<P>) -> Result<(), Error> {
    let filename = desc.save_settings.filename.as_ref();
    let file = if filename.exists() && !desc.save_settings.overwrite {
        hdf5::File::append(filename)?
    } else {
        hdf5::File::create(filename)?
    };

    let bar = if desc.verbose {
        println!("# of profiles: {}", desc.profiles.len());
        Some(indicatif::ProgressBar::new(desc.profiles.len() as u64))
    } else {
        None
    };

    for (name, profile) in desc.profiles {
        let name = group_name(name);
        if file.member_names()?.iter().any(|member| *member == name) {
            file.unlink(&name)?;
        }

        let group = file.create_group(&name)?;
        let npoints = profile.len();
        group.new_dataset::<f64>()
            .shape(npoints)
            .create("positions")?
            .write(profile.positions.view())?;
        group.new_dataset::<f64>()
            .shape(npoints)
            .create("magnitudes")?
            .write(profile.magnitudes.view())?;
        group.new_dataset::<f64>()
            .shape(npoints)
            .create("z_in_re")?
            .write(profile.impedances.mapv(|z| z.re).view())?;
        group.new_dataset::<f64>()
            .shape(npoints)
            .create("z_in_im")?
            .write(profile.impedances.mapv(|z| z.im).view())?;

        for (attr_name, value) in [
            ("frequency", profile.frequency),
            ("z0_re", profile.z0.re),
            ("z0_im", profile.z0.im),
            ("alpha", profile.alpha()),
            ("beta", profile.beta()),
        ] {
            group.new_attr::<f64>()
                .shape(hdf5::Extents::Scalar)
                .create(attr_name)?
                .write_scalar(&value)?;
        }

        if let Some(ref bar) = bar {
            bar.inc(1)
        }
    }

    if let Some(ref bar) = bar {
        bar.finish();
    }
    file.close()?;
    tracing::debug!(path = %filename.display(), profiles = desc.profiles.len(), "exported profiles");

    Ok(())
}

/// Computes the profile of every catalog set under `config` and saves them,
/// one group per set name. Returns the number of profiles written.
pub fn export_catalog<K: KeyValueStore, P: AsRef<Path>>(
    store: &CatalogStore<K>,
    config: &LineConfiguration,
    save_settings: SaveSettings<P>,
    verbose: bool,
) -> Result<usize, Error> {
    let profiles = store
        .load()?
        .iter()
        .map(|set| {
            ImpedanceProfile::compute(config.sweep(set.params)).map(|p| (set.name.clone(), p))
        })
        .collect::<Result<Vec<_>, Error>>()?;

    save_profiles(ExportDescriptor {
        profiles: &profiles,
        save_settings,
        verbose,
    })?;

    Ok(profiles.len())
}

// '/' would nest groups; escaping '%' first keeps distinct names distinct
fn group_name(name: &str) -> String {
    name.replace('%', "%25").replace('/', "%2F")
}
