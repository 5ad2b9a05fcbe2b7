use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{debug, info};
use strum::IntoEnumIterator;

use interval::{Bound, Interval};

/// Interval arithmetic from the command line
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluates a function over one or two intervals
    Eval {
        /// Function name (see `list`)
        func: Function,

        /// Arguments, written as `[lo, hi]`, `mid±margin`, `mid+-margin`,
        /// or a bare number (which gets a machine-epsilon margin)
        ///
        /// Flags such as `--f32` must come before the function name.
        #[clap(required = true, allow_hyphen_values = true)]
        args: Vec<String>,

        /// Use single-precision bounds
        #[clap(long)]
        f32: bool,
    },

    /// Lists every function with its number of arguments
    List,

    /// Finds the smaller root of `a x² + b x + c`, with and without
    /// catastrophic cancellation
    Quadratic {
        #[clap(allow_hyphen_values = true)]
        a: String,
        #[clap(allow_hyphen_values = true)]
        b: String,
        #[clap(allow_hyphen_values = true)]
        c: String,
    },
}

#[derive(
    Copy,
    Clone,
    Debug,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
enum Function {
    Neg,
    Abs,
    Square,
    Recip,
    Sqrt,
    Cbrt,
    Exp,
    ExpM1,
    Ln,
    Log2,
    Log10,
    #[strum(serialize = "ln_1p")]
    Ln1p,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
    NormalizeAngle,

    Add,
    Sub,
    Mul,
    Div,
    Atan2,
    Hypot,
    Powf,
}

impl Function {
    fn arity(self) -> usize {
        match self {
            Function::Add
            | Function::Sub
            | Function::Mul
            | Function::Div
            | Function::Atan2
            | Function::Hypot
            | Function::Powf => 2,
            _ => 1,
        }
    }

    fn eval<T: Bound>(self, args: &[Interval<T>]) -> Result<Interval<T>> {
        if args.len() != self.arity() {
            bail!(
                "`{self}` takes {} argument(s), but {} were given",
                self.arity(),
                args.len()
            );
        }
        let x = args[0];
        let out = match self {
            Function::Neg => -x,
            Function::Abs => x.abs(),
            Function::Square => x.square(),
            Function::Recip => x.recip(),
            Function::Sqrt => x.sqrt(),
            Function::Cbrt => x.cbrt(),
            Function::Exp => x.exp(),
            Function::ExpM1 => x.exp_m1(),
            Function::Ln => x.ln(),
            Function::Log2 => x.log2(),
            Function::Log10 => x.log10(),
            Function::Ln1p => x.ln_1p(),
            Function::Sin => x.sin(),
            Function::Cos => x.cos(),
            Function::Tan => x.tan(),
            Function::Asin => x.asin(),
            Function::Acos => x.acos(),
            Function::Atan => x.atan(),
            Function::Sinh => x.sinh(),
            Function::Cosh => x.cosh(),
            Function::Tanh => x.tanh(),
            Function::Asinh => x.asinh(),
            Function::Acosh => x.acosh(),
            Function::Atanh => x.atanh(),
            Function::NormalizeAngle => x.normalize_angle(),

            Function::Add => x + args[1],
            Function::Sub => x - args[1],
            Function::Mul => x * args[1],
            Function::Div => x / args[1],
            Function::Atan2 => x.atan2(args[1]),
            Function::Hypot => x.hypot(args[1]),
            Function::Powf => x.powf(args[1]),
        };
        Ok(out)
    }
}

fn parse<T: Bound>(s: &str) -> Result<Interval<T>> {
    s.parse()
        .with_context(|| format!("could not parse `{s}` as an interval"))
}

fn run_eval<T: Bound>(func: Function, args: &[String]) -> Result<()> {
    let args = args
        .iter()
        .map(|s| parse::<T>(s))
        .collect::<Result<Vec<_>>>()?;
    for (i, a) in args.iter().enumerate() {
        debug!("argument {i}: {a:?}");
    }

    let start = Instant::now();
    let out = func.eval(&args)?;
    info!("Evaluated `{func}` in {:?}", start.elapsed());

    println!("{out}");
    println!("mid     = {}", out.mid());
    println!("margin  = {}", out.margin());
    println!("epsilon = {}", out.epsilon());
    Ok(())
}

fn run_quadratic(a: &str, b: &str, c: &str) -> Result<()> {
    let a = parse::<f64>(a)?;
    let b = parse::<f64>(b)?;
    let c = parse::<f64>(c)?;

    let disc = b.square() - 4.0 * a * c;
    debug!("discriminant: {disc}");
    let det = disc.sqrt();
    if det.is_nan() {
        bail!("discriminant {disc} may be negative");
    }

    // Pick the sign that adds magnitudes in the stable form
    let det = if b.is_sign_negative() { -det } else { det };

    let naive = (-b + det) / (2.0 * a);
    let stable = (2.0 * c) / (-b - det);

    println!("naive:  {naive}");
    println!("        epsilon = {}", naive.epsilon());
    println!("stable: {stable}");
    println!("        epsilon = {}", stable.epsilon());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .init();

    let args = Args::parse();
    match args.cmd {
        Command::Eval { func, args, f32 } => {
            if f32 {
                run_eval::<f32>(func, &args)
            } else {
                run_eval::<f64>(func, &args)
            }
        }
        Command::List => {
            for f in Function::iter() {
                println!("{f} ({})", f.arity());
            }
            Ok(())
        }
        Command::Quadratic { a, b, c } => run_quadratic(&a, &b, &c),
    }
}
