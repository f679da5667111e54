use std::ffi::OsStr;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use image::{GrayImage, ImageReader};
use image_convolution as ic;
use log::{debug, info};

mod structs;

use structs::{Algorithm, KernelSize, KernelType};

#[derive(Parser)]
#[clap(version, about, long_about = None)]
#[clap(disable_help_flag = true)]
struct Cli {
    #[clap(long, action = clap::ArgAction::HelpLong)]
    help: Option<bool>,

    /// Path to source image file
    #[clap(value_parser)]
    source_path: PathBuf,

    /// Path to result image file
    #[clap(value_parser)]
    destination_path: Option<PathBuf>,

    /// Overwrite destination file
    #[clap(short, long, action)]
    overwrite: bool,

    /// Strategy used to compute the convolution
    #[clap(short, long, value_enum, default_value_t = Algorithm::Sequential)]
    algorithm: Algorithm,

    /// Number of threads used by parallel strategies [default: number of CPUs]
    #[clap(short, long, value_parser)]
    threads: Option<NonZeroU32>,

    /// Type of kernel convolved with the image
    #[clap(short, long, value_enum, default_value_t = KernelType::Box)]
    kernel: KernelType,

    /// Size of one side of the kernel
    #[clap(short = 's', long, value_enum, default_value_t = KernelSize::Three)]
    kernel_size: KernelSize,

    /// Standard deviation of the "gaussian" kernel
    #[clap(long, value_parser, default_value_t = 1.0)]
    sigma: f32,

    /// Number of times the convolution is repeated, the best time is reported
    #[clap(short, long, value_parser, default_value_t = NonZeroU32::MIN)]
    repeat: NonZeroU32,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,
}

fn main() -> Result<()> {
    let cli: Cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();
    convolve(&cli)
}

fn convolve(cli: &Cli) -> Result<()> {
    let src_image = open_source_image(cli)?;
    let algorithm = cli.algorithm.with_threads(get_num_threads(cli));
    let convolver = ic::Convolver::new(algorithm);

    let dst_image = match cli.kernel_size {
        KernelSize::Three => run(cli, &convolver, &src_image, create_kernel::<3>(cli)?)?,
        KernelSize::Five => run(cli, &convolver, &src_image, create_kernel::<5>(cli)?)?,
        KernelSize::Seven => run(cli, &convolver, &src_image, create_kernel::<7>(cli)?)?,
    };

    save_result(cli, dst_image)
}

fn open_source_image(cli: &Cli) -> Result<GrayImage> {
    let source_path = &cli.source_path;
    debug!("Opening the source image {:?}", source_path);
    let image = ImageReader::open(source_path)
        .with_context(|| format!("Failed to read source file from {:?}", source_path))?
        .decode()
        .with_context(|| "Failed to decode source image")?;
    debug!("Convert the source image into grayscale");
    Ok(image.to_luma8())
}

fn get_num_threads(cli: &Cli) -> NonZeroU32 {
    if let Some(threads) = cli.threads {
        if matches!(cli.algorithm, Algorithm::Sequential) {
            debug!("Sequential algorithm ignores the number of threads");
        }
        return threads;
    }
    std::thread::available_parallelism()
        .ok()
        .and_then(|count| NonZeroU32::try_from(count).ok())
        .unwrap_or(NonZeroU32::MIN)
}

fn create_kernel<const K: usize>(cli: &Cli) -> Result<ic::Kernel<K>> {
    let kernel = match cli.kernel {
        KernelType::Identity => ic::Kernel::identity(),
        KernelType::Box => ic::Kernel::box_blur(),
        KernelType::Gaussian => ic::Kernel::gaussian(cli.sigma),
        KernelType::Sharpen | KernelType::Edge => {
            if K != 3 {
                return Err(anyhow!(
                    "Kernel {:?} is available only with size 3",
                    cli.kernel
                ));
            }
            let kernel3 = if cli.kernel == KernelType::Sharpen {
                ic::Kernel::<3>::SHARPEN
            } else {
                ic::Kernel::<3>::EDGE
            };
            ic::Kernel::from_slice(kernel3.rows().as_flattened())
                .with_context(|| "Failed to create kernel")?
        }
    };
    Ok(kernel)
}

fn run<const K: usize>(
    cli: &Cli,
    convolver: &ic::Convolver,
    src_image: &GrayImage,
    kernel: ic::Kernel<K>,
) -> Result<ic::Image> {
    let src_view = ic::ImageRef::from(src_image);
    debug!(
        "Convolve {}x{} image with {}x{} {:?} kernel, algorithm {:?}",
        src_view.width(),
        src_view.height(),
        K,
        K,
        cli.kernel,
        convolver.algorithm,
    );

    let timed_convolve = || -> Result<(ic::Image, Duration)> {
        let start = Instant::now();
        let image = convolver
            .convolve(&src_view, &kernel)
            .with_context(|| "Failed to convolve image")?;
        let elapsed = start.elapsed();
        debug!("Convolution took {:?}", elapsed);
        Ok((image, elapsed))
    };

    let (mut dst_image, mut best_time) = timed_convolve()?;
    for _ in 1..cli.repeat.get() {
        let (image, elapsed) = timed_convolve()?;
        dst_image = image;
        best_time = best_time.min(elapsed);
    }

    let flop = flop_count(src_view.width(), src_view.height(), K);
    let nanos = best_time.as_nanos().max(1) as f64;
    info!(
        "time: {:.3} ms, GFLOPS: {:.3}",
        best_time.as_secs_f64() * 1e3,
        flop as f64 / nanos
    );
    Ok(dst_image)
}

/// Nominal number of floating-point operations of one convolution:
/// one multiplication and one addition for every kernel weight
/// of every interior pixel.
fn flop_count(width: u32, height: u32, kernel_size: usize) -> u64 {
    let radius = (kernel_size / 2) as u64;
    let interior_width = (width as u64).saturating_sub(2 * radius);
    let interior_height = (height as u64).saturating_sub(2 * radius);
    let taps = (kernel_size * kernel_size) as u64;
    2 * taps * interior_width * interior_height
}

fn save_result(cli: &Cli, image: ic::Image) -> Result<()> {
    let result_path = if let Some(path) = cli.destination_path.clone() {
        path
    } else {
        let mut path = PathBuf::from("./");
        let ext = cli
            .source_path
            .extension()
            .unwrap_or_else(|| OsStr::new("png"));
        path.push("result");
        path.set_extension(ext);
        path
    };
    if result_path.exists() && !cli.overwrite {
        return Err(anyhow!(
            "Destination path {:?} already exists.",
            result_path
        ));
    };

    debug!("Save the result image into the file {:?}", result_path);
    GrayImage::try_from(image)
        .with_context(|| "Failed to create the result image")?
        .save(&result_path)
        .with_context(|| "Failed to save the result image")?;
    Ok(())
}
