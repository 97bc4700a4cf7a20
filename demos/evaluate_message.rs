// Copyright 2025 ULDE Team

use anyhow::{ensure, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use ulde_field::{Goldilocks, Mersenne31, PrimeField};
use ulde_math::{EvaluationDomain, UnivariateExtension};
use ulde_utils::{rayon::adjust_thread_pool, tracing::init_tracing};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FieldChoice {
	Goldilocks,
	Mersenne31,
}

#[derive(Debug, Parser)]
struct Args {
	/// The message whose character codes are interpolated on 0, 1, …, n-1.
	#[arg(short, long)]
	message: String,
	/// Canonical representative of the evaluation point.
	#[arg(short, long)]
	point: u64,
	/// The prime field to evaluate over.
	#[arg(long, value_enum, default_value_t = FieldChoice::Goldilocks)]
	field: FieldChoice,
	/// Also evaluate with the barycentric formula and compare the results.
	#[arg(long, default_value_t = false)]
	cross_check: bool,
}

fn run<F: PrimeField>(args: &Args) -> Result<()> {
	let extension = UnivariateExtension::<F>::from_text(&args.message)?;
	let point = F::from_canonical(args.point)?;

	info!(size = extension.size(), %point, "evaluating univariate extension");
	let value = extension.evaluate(point)?;

	if args.cross_check {
		let domain = EvaluationDomain::<F>::integer(extension.size())?;
		let expected = domain.extrapolate(extension.values(), point)?;
		ensure!(value == expected, "barycentric evaluation gave {expected}, recurrence gave {value}");
		info!("barycentric cross-check passed");
	}

	println!("n = {}, r = {}, P(r) = {}", extension.size(), point, value);
	Ok(())
}

fn main() -> Result<()> {
	adjust_thread_pool()
		.as_ref()
		.expect("failed to init thread pool");

	let args = Args::parse();

	init_tracing()?;

	match args.field {
		FieldChoice::Goldilocks => run::<Goldilocks>(&args),
		FieldChoice::Mersenne31 => run::<Mersenne31>(&args),
	}
}
