use argh::FromArgs;
use rand::{rngs::StdRng, Rng, SeedableRng};

use bgrkit::image::{Image, ImageSize, Pixel3, WHITE};
use bgrkit::imgproc::{color, morphology, parallel::ExecutionStrategy, threshold};

#[derive(FromArgs)]
/// Segment a red disc out of a noisy synthetic BGR image
struct Args {
    /// width of the synthetic image
    #[argh(option, default = "48")]
    width: usize,

    /// height of the synthetic image
    #[argh(option, default = "24")]
    height: usize,

    /// seed of the noise generator
    #[argh(option, default = "42")]
    seed: u64,

    /// iterations of every neighborhood operation
    #[argh(option, short = 'k', default = "1")]
    iterations: i64,

    /// lowest accepted hue; larger than hue-max for a wrapping range
    #[argh(option, default = "170")]
    hue_min: u8,

    /// highest accepted hue
    #[argh(option, default = "10")]
    hue_max: u8,

    /// lowest accepted saturation and value
    #[argh(option, default = "100")]
    min_saturation: u8,

    /// threads used by the median filter, the global pool if not given
    #[argh(option)]
    threads: Option<usize>,
}

const RED: Pixel3 = [20, 30, 220];

fn synthetic_image(size: ImageSize, seed: u64) -> Result<Image<u8, 3>, Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut image = Image::from_size_val(size, 0u8)?;

    let (cx, cy) = (size.width as f64 / 2.0, size.height as f64 / 2.0);
    let radius = size.width.min(size.height) as f64 / 3.0;

    for y in 0..size.height {
        for x in 0..size.width {
            let inside = (x as f64 - cx).hypot(y as f64 - cy) < radius;
            let pixel = match (inside, rng.random_bool(0.05)) {
                // salt noise
                (false, true) => RED,
                (true, true) => [rng.random(), rng.random(), rng.random()],
                (true, false) => RED,
                (false, false) => {
                    let gray = rng.random_range(0..80);
                    [gray, gray, gray]
                }
            };
            image.set_pixel(x, y, pixel)?;
        }
    }

    Ok(image)
}

fn count_selected(mask: &Image<u8, 3>) -> usize {
    mask.as_slice()
        .chunks_exact(3)
        .filter(|p| *p == WHITE)
        .count()
}

fn print_mask(mask: &Image<u8, 3>) {
    for y in 0..mask.rows() {
        let line: String = mask
            .row(y)
            .chunks_exact(3)
            .map(|p| if p == WHITE { '#' } else { '.' })
            .collect();
        println!("{line}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();
    let iterations = morphology::checked_iterations(args.iterations)?;
    let strategy = args
        .threads
        .map_or(ExecutionStrategy::default(), ExecutionStrategy::Fixed);

    let size = ImageSize {
        width: args.width,
        height: args.height,
    };
    let bgr = synthetic_image(size, args.seed)?;
    log::info!("generated {} image with seed {}", size, args.seed);

    // remove the salt noise before looking at colors
    let denoised = morphology::neighborhood_filter(
        &bgr,
        iterations,
        morphology::WindowReduction::Rank(morphology::MEDIAN_RANK),
        strategy,
    )?;

    let mut hsv = denoised;
    color::convert_hsv(&mut hsv)?;

    let mask = threshold::select_color(
        &hsv,
        &[args.hue_min, args.min_saturation, args.min_saturation],
        &[args.hue_max, 255, 255],
    )?;
    log::info!("selected {} pixels", count_selected(&mask));

    let opened = morphology::morphology_open(&mask, iterations)?;
    let cleaned = morphology::morphology_close(&opened, iterations)?;
    log::info!("{} pixels after open and close", count_selected(&cleaned));

    print_mask(&cleaned);

    Ok(())
}
