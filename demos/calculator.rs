use tline_zin::prelude::*;

/// Answers every question with yes and prints alerts.
struct ConsolePrompt;

impl Prompt for ConsolePrompt {
    fn confirm(&mut self, message: &str) -> bool {
        println!("{} [y]", message);
        true
    }
    fn alert(&mut self, message: &str) {
        println!("{}", message);
    }
}

fn main() {
    tracing_subscriber::fmt::init();
    std::fs::create_dir_all("data").unwrap();

    let store = CatalogStore::new(Hdf5Store::new("data/rlgc_catalog.h5"));
    let mut main_view = MainView::open(store, LineInputs {
        frequency: "1000".into(), // [Hz]
        line_length: "10".into(), // [km]
        load_magnitude: "50".into(), // [Ω]
        load_phase: "0".into(), // [deg]
        max_impedance: "500".into(), // [Ω]
        autoscale: false,
    })
    .unwrap();

    let render = main_view.render().unwrap();
    println!(
        "\n-- {} --\n\
        Z0:       {}\n\
        Z0:       {}\n\
        α:        {}\n\
        β:        {} deg/km\n\
        Zin:      {}\n\
        Zin:      {}\n",
        render.names[render.selected],
        render.z0_polar(),
        render.z0_rectangular(),
        render.attenuation(),
        render.beta(),
        render.z_in_polar(),
        render.z_in_rectangular(),
    );

    // save a lossless variant next to the default set
    main_view.form.name = "Lossless".into();
    main_view.form.r = "0".into();
    main_view.form.g = "0".into();
    main_view.save_form(&mut ConsolePrompt).unwrap();

    let mut list = main_view.open_list().unwrap();
    for set in list.rows() {
        println!("{:<12} {:>10.3e} {:>10.3e} {:>10.3e} {:>10.3e}",
            set.name, set.params.r, set.params.l, set.params.g, set.params.c);
    }

    // delete from the list surface and bring the calculator back in step
    let last = list.rows().len() - 1;
    list.delete(last, &mut ConsolePrompt).unwrap();
    let sync = main_view.synchronizer();
    sync.propagate(&mut [&mut main_view, &mut list]).unwrap();

    let render = main_view.render().unwrap();
    println!("\n-- |Zin| along {} --", render.names[render.selected]);
    for (x, magnitude) in render.points().iter().step_by(10) {
        println!("{:>8.3} km  {:>10.3} Ω", x, magnitude);
    }
    println!("revision seen by list: {:?}", list.seen_revision());
}
