use clap::Parser;
use env_logger::Env;
use motheye::{
    console::{Args, PartialArgs, Task},
    distributions::{
        solar::SOLAR_DISTRIBUTION_FILE_NAME, GaussianAngularDistribution, SolarColumn,
        SolarSpectrum,
    },
    effective_medium::{
        default_wavelengths, slice_heights, to_curve_plot, EffectiveIndexModel,
        DEFAULT_NR_OF_SLICES,
    },
    error::{MeResult, MothEyeError},
    geometry::load_segments,
    plottable::{render, CurvePlot, PltBackEnd, Plottable, DEFAULT_FIG_SIZE},
};
use plotters::prelude::{BitMapBackend, IntoDrawingArea};
use std::{
    io::{self, Write},
    path::Path,
};

fn progress(msg: &str) {
    print!("{msg}...");
    let _ = io::stdout().flush();
}

fn input_file(args: &Args) -> MeResult<&Path> {
    args.file_path
        .as_deref()
        .ok_or_else(|| MothEyeError::Console("no input file given".into()))
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output")
        .to_owned()
}

fn write_plot<P: Plottable>(plot: &P, path: &Path, print_str: &str) -> MeResult<()> {
    progress(&format!("Write {print_str} to {}", path.display()));
    plot.to_plot(path, PltBackEnd::Bitmap)?;
    println!("Success");
    Ok(())
}

fn render_geometry(args: &Args) -> MeResult<()> {
    let path = input_file(args)?;
    progress("\nReading geometry");
    let segments = load_segments(path)?;
    println!("Success");
    let stem = file_stem(path);
    let f_path = args.output_directory.join(format!("{stem}.png"));
    progress(&format!("Write geometry plot to {}", f_path.display()));
    let root = BitMapBackend::new(&f_path, DEFAULT_FIG_SIZE).into_drawing_area();
    let colors = render(&segments, &stem, &root)?;
    println!("Success");
    println!("Categories: {}", colors.legend_entries().join(", "));
    Ok(())
}

fn generate_angular_distributions(output_directory: &Path) -> MeResult<()> {
    let mut plot = CurvePlot::new("Angular distributions", "angle in degree", "probability");
    for generator in GaussianAngularDistribution::default_sweep() {
        let distribution = generator.generate()?;
        let f_path = output_directory.join(generator.file_name());
        progress(&format!("Write distribution to {}", f_path.display()));
        distribution.save(&f_path)?;
        println!("Success");
        plot.add_xy(
            distribution.angles(),
            distribution.probabilities(),
            Some(format!("σ = {}°", generator.sigma_in_degree())),
        );
    }
    write_plot(
        &plot,
        &output_directory.join("angular_distributions.png"),
        "distribution plot",
    )
}

fn convert_solar_spectrum(args: &Args) -> MeResult<()> {
    let path = input_file(args)?;
    progress("\nReading solar spectrum");
    let spectrum = SolarSpectrum::from_csv(path, SolarColumn::default())?;
    println!("Success");
    println!("Irradiance column: {}", spectrum.column());
    let distribution = spectrum.probability_distribution()?;
    let f_path = args.output_directory.join(SOLAR_DISTRIBUTION_FILE_NAME);
    progress(&format!("Write distribution to {}", f_path.display()));
    distribution.save(&f_path)?;
    println!("Success");
    write_plot(
        &distribution.to_curve_plot(),
        &f_path.with_extension("png"),
        "spectrum plot",
    )
}

fn calculate_index_curves(output_directory: &Path) -> MeResult<()> {
    let model = EffectiveIndexModel::default();
    let heights = slice_heights(1.0, DEFAULT_NR_OF_SLICES)?;
    let wavelengths = default_wavelengths()?;
    progress("\nCalculating effective refractive index");
    let curves = model.index_curves(&heights, &wavelengths)?;
    println!("Success");
    let plot = to_curve_plot(&curves, &wavelengths, "Effective refractive index");
    write_plot(
        &plot,
        &output_directory.join("effective_refractive_index.png"),
        "index plot",
    )
}

fn main() -> MeResult<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    //parse CLI arguments
    let args = Args::try_from(PartialArgs::parse())?;
    match args.task {
        Task::Geometry => render_geometry(&args),
        Task::AngularDistribution => generate_angular_distributions(&args.output_directory),
        Task::SolarSpectrum => convert_solar_spectrum(&args),
        Task::RefractiveIndex => calculate_index_curves(&args.output_directory),
    }
}
