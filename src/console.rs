//! Handling the motheye CLI
//!
//! This module handles the command line parsing as well as basic information (e.g. help dialog, version information, etc.).
use crate::{
    error::{MeResult, MothEyeError},
    get_version,
};
use clap::{builder::Str, Parser};
use rprompt::prompt_reply_from_bufread;
use std::{
    fmt::Display,
    io::{stdin, stdout, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};
use strum::{EnumIter, IntoEnumIterator};

/// Tasks that can be performed by the motheye application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Task {
    /// render the segments of a geometry document
    Geometry,
    /// generate the set of angular Gaussian distributions
    AngularDistribution,
    /// convert the AM1.5 solar spectrum into a wavelength distribution
    SolarSpectrum,
    /// calculate effective refractive index curves of the moth-eye coating
    RefractiveIndex,
}
impl Task {
    /// Returns the extension of the input file needed by this [`Task`] or `None` if the task
    /// does not read a file.
    #[must_use]
    pub const fn input_extension(&self) -> Option<&'static str> {
        match self {
            Self::Geometry => Some("json"),
            Self::SolarSpectrum => Some("csv"),
            Self::AngularDistribution | Self::RefractiveIndex => None,
        }
    }
    const fn flag(self) -> &'static str {
        match self {
            Self::Geometry => "g",
            Self::AngularDistribution => "a",
            Self::SolarSpectrum => "s",
            Self::RefractiveIndex => "r",
        }
    }
}
impl Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Geometry => write!(f, "geometry rendering"),
            Self::AngularDistribution => write!(f, "angular distributions"),
            Self::SolarSpectrum => write!(f, "solar spectrum distribution"),
            Self::RefractiveIndex => write!(f, "effective refractive index"),
        }
    }
}

/// Command line arguments for the motheye application.
pub struct Args {
    /// task to be performed
    pub task: Task,

    /// file path of the input document. `None` for tasks without input file
    pub file_path: Option<PathBuf>,

    /// destination directory of all generated files
    pub output_directory: PathBuf,
}

#[derive(Parser)]
#[command(author, version = Str::from(&get_version()), about, long_about = None)]
pub struct PartialArgs {
    /// task to perform: g (geometry), a (angular distributions), s (solar spectrum), r (refractive index)
    #[arg(short, long)]
    task: Option<String>,

    /// filepath of the input document (geometry .json or spectrum .csv)
    #[arg(short, long)]
    file_path: Option<String>,

    /// destination directory of the output. if not defined, same directory as the input file (or the current directory) is used
    #[arg(short, long)]
    output_directory: Option<String>,
}

/// Checks if the passed file path is an existing file with the given extension.
fn file_path_is_valid(path: &Path, extension: &str) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

fn eval_file_path_input(file_path: &str, extension: &str) -> Option<PathBuf> {
    let path = Path::new(file_path);
    if file_path_is_valid(path, extension) {
        Some(path.to_path_buf())
    } else {
        None
    }
}

/// Evaluates if the passed task string is valid.
fn eval_task_input(task_input: &str) -> Option<Task> {
    Task::iter().find(|t| t.flag() == task_input)
}

/// Evaluates if the passed output-directory string is valid.
///
/// An empty input is accepted and replaced by the default directory later on.
fn eval_output_directory_input(output_path: &str) -> Option<PathBuf> {
    let o_path = Path::new(output_path);
    if o_path.is_dir() {
        Some(PathBuf::from(output_path))
    } else if output_path.is_empty() {
        Some(PathBuf::new())
    } else {
        None
    }
}

/// Creates the prompt string that is displayed in the console, depending on the flag
/// # Attributes
/// * `flag`:       Respective argument flag. "t" for the task, "f" for the input file and "o" for the output directory.
/// * `init_str`:   Prepended String. Used if some messages schould be displayed beforehand.
/// # Errors
/// Errors if an invalid flag type has been used
fn create_prompt_str(flag: &str, init_str: &str) -> MeResult<String> {
    let mut prompt_str = init_str.to_owned();
    match flag {
        "t" => {
            for task in Task::iter() {
                prompt_str += &format!("{} for {task}\n", task.flag());
            }
            Ok(prompt_str)
        }
        "f" => Ok(prompt_str + "Please insert path to the input file:\n"),
        "o" => Ok(prompt_str
            + "Please insert an output directory or nothing to select the directory of the input file\n"),
        _ => Err(MothEyeError::Console(
            "Invalid flag type! Cannot create prompt string!".into(),
        )),
    }
}

/// Extracts an argument, prompting the user as long as the input is missing or invalid.
/// # Attributes
/// * `func`:       Function to evaluate the input string of the given argument.
/// * `input`:      String-Option of the argument
/// * `arg_flag`:   Respective argument flag (see [`create_prompt_str`]).
/// * `reader`:     Type that implements the `BufRead` trait to read from. May be stdin().lock() for user input or a `BufReader` from a static String for tests
/// * `writer`:     Type that implements the Write trait to write into.
/// # Errors
/// Returns an [`MothEyeError::Console`] if reading the user input fails (e.g. at the end of the input).
fn get_args<T, F: Fn(&str) -> Option<T>>(
    func: &F,
    input: Option<&str>,
    arg_flag: &str,
    reader: &mut impl BufRead,
    writer: &mut impl Write,
) -> MeResult<T> {
    let init_str = match input {
        Some(i) => match func(i) {
            Some(arg) => return Ok(arg),
            None => "Invalid input!\n",
        },
        None => "",
    };
    let prompt_str = create_prompt_str(arg_flag, init_str)?;
    let input: String = prompt_reply_from_bufread(reader, writer, prompt_str)
        .map_err(|e| MothEyeError::Console(format!("could not read input: {e}")))?;
    get_args(func, Some(input.as_str()), arg_flag, reader, writer)
}

/// Returns the parent directory of the given file or the current directory.
fn get_parent_dir(path: Option<&Path>) -> PathBuf {
    path.and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

fn resolve_args(
    part_args: &PartialArgs,
    reader: &mut impl BufRead,
    writer: &mut impl Write,
) -> MeResult<Args> {
    let task = get_args(
        &eval_task_input,
        part_args.task.as_deref(),
        "t",
        reader,
        writer,
    )?;
    println!("Task: {task}");

    let file_path = if let Some(extension) = task.input_extension() {
        let path = get_args(
            &|p: &str| eval_file_path_input(p, extension),
            part_args.file_path.as_deref(),
            "f",
            reader,
            writer,
        )?;
        println!("Path to input file: {}", path.display());
        Some(path)
    } else {
        None
    };

    let output_directory = get_args(
        &eval_output_directory_input,
        part_args.output_directory.as_deref(),
        "o",
        reader,
        writer,
    )?;
    let output_directory = if output_directory.as_os_str().is_empty() {
        get_parent_dir(file_path.as_deref())
    } else {
        output_directory
    };
    println!("Output directory: {}", output_directory.display());
    Ok(Args {
        task,
        file_path,
        output_directory,
    })
}

impl TryFrom<PartialArgs> for Args {
    type Error = MothEyeError;

    fn try_from(part_args: PartialArgs) -> MeResult<Self> {
        let mut reader = BufReader::new(stdin().lock());
        let mut writer = BufWriter::new(stdout().lock());
        //intro only shown when neither the help, nor the version flag is specified
        show_intro();
        resolve_args(&part_args, &mut reader, &mut writer)
    }
}

/// Creates the intro banner.
#[must_use]
fn create_intro() -> String {
    let intro_str = format!(
        "{: ^72}\n",
        "Motheye - Ray-tracing toolbox for moth-eye anti-reflection coatings"
    );
    let intro_logo = r"
                  .-.             __             .-.
                 (   `.         .'  '.         .'   )
                  `.   `-.__.-'  ()  '-.__.-'   .'
                    `-._   .---.    .---.   _.-'
                        `-( (o) )  ( (o) )-'
                    _.-'   '---'    '---'   `-._
                  .'   .-'``-.  ()  .-``'-.   `.
                 (   .'       '.__.'       `.   )
                  `-'                        `-'
";
    format!("{intro_logo}{intro_str}")
}

/// Show the intro banner and the CLI version information.
pub fn show_intro() {
    let intro = create_intro();
    let version_str = format!("{: ^72}\n", "version ".to_owned() + &get_version());
    println!("{intro}{version_str}");
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn test_dir() -> (TempDir, PathBuf, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let geometry = dir.path().join("geometry.json");
        File::create(&geometry).unwrap();
        let spectrum = dir.path().join("astmg173.csv");
        File::create(&spectrum).unwrap();
        (dir, geometry, spectrum)
    }
    #[test]
    fn task() {
        assert_eq!(Task::iter().count(), 4);
        assert_eq!(Task::Geometry.input_extension(), Some("json"));
        assert_eq!(Task::SolarSpectrum.input_extension(), Some("csv"));
        assert_eq!(Task::AngularDistribution.input_extension(), None);
        assert_eq!(Task::RefractiveIndex.input_extension(), None);
        assert_eq!(Task::Geometry.to_string(), "geometry rendering");
    }
    #[test]
    fn file_path_is_valid_test() {
        let (dir, geometry, spectrum) = test_dir();
        assert!(file_path_is_valid(&geometry, "json"));
        assert!(file_path_is_valid(&spectrum, "csv"));
        assert!(!file_path_is_valid(&spectrum, "json"));
        assert!(!file_path_is_valid(&dir.path().join("nonexistent.json"), "json"));
        assert!(!file_path_is_valid(dir.path(), "json"));
    }
    #[test]
    fn eval_file_path_input_test() {
        let (_dir, geometry, _) = test_dir();
        let path = geometry.to_str().unwrap();
        assert_eq!(
            eval_file_path_input(path, "json"),
            Some(PathBuf::from(path))
        );
        assert_eq!(eval_file_path_input(path, "csv"), None);
        assert_eq!(
            eval_file_path_input("./this_dir_does_not_exist/empty.json", "json"),
            None
        );
    }
    #[test]
    fn eval_task_input_test() {
        assert_eq!(eval_task_input("g"), Some(Task::Geometry));
        assert_eq!(eval_task_input("a"), Some(Task::AngularDistribution));
        assert_eq!(eval_task_input("s"), Some(Task::SolarSpectrum));
        assert_eq!(eval_task_input("r"), Some(Task::RefractiveIndex));
        assert_eq!(eval_task_input("nothing_available"), None);
    }
    #[test]
    fn eval_output_directory_input_test() {
        let (dir, geometry, _) = test_dir();
        assert_eq!(eval_output_directory_input(""), Some(PathBuf::new()));
        assert_eq!(
            eval_output_directory_input("non_existent_path/still_not_existent/"),
            None
        );
        let dir_str = dir.path().to_str().unwrap();
        assert_eq!(
            eval_output_directory_input(dir_str),
            Some(PathBuf::from(dir_str))
        );
        assert_eq!(eval_output_directory_input(geometry.to_str().unwrap()), None);
    }
    #[test]
    fn get_parent_dir_test() {
        assert_eq!(
            get_parent_dir(Some(Path::new("./files/geometry.json"))),
            PathBuf::from("./files")
        );
        assert_eq!(
            get_parent_dir(Some(Path::new("geometry.json"))),
            PathBuf::from(".")
        );
        assert_eq!(get_parent_dir(None), PathBuf::from("."));
    }
    #[test]
    fn create_prompt_str_test() {
        assert_eq!(
            create_prompt_str("t", "test_str\r\n").unwrap(),
            "test_str\r\ng for geometry rendering\na for angular distributions\ns for solar spectrum distribution\nr for effective refractive index\n"
        );
        assert_eq!(
            create_prompt_str("f", "").unwrap(),
            "Please insert path to the input file:\n"
        );
        assert_eq!(create_prompt_str("o", "Invalid input!\n").unwrap(), "Invalid input!\nPlease insert an output directory or nothing to select the directory of the input file\n");
        assert!(create_prompt_str("invalid_flag", "").is_err());
    }
    #[test]
    fn intro_test() {
        let intro = create_intro();
        assert!(intro.contains("Motheye - Ray-tracing toolbox for moth-eye anti-reflection coatings"));
        assert!(intro.ends_with('\n'));
    }
    #[test]
    fn get_args_test() {
        let mut writer = Vec::new();

        let mut reader = BufReader::new(&b"s\r\n"[..]);
        let task = get_args(&eval_task_input, Some("g"), "t", &mut reader, &mut writer).unwrap();
        assert_eq!(task, Task::Geometry);

        let mut reader = BufReader::new(&b"s\r\n"[..]);
        let task = get_args(&eval_task_input, None, "t", &mut reader, &mut writer).unwrap();
        assert_eq!(task, Task::SolarSpectrum);

        let mut reader = BufReader::new(&b"x\nr\n"[..]);
        let task = get_args(
            &eval_task_input,
            Some("not_a_task"),
            "t",
            &mut reader,
            &mut writer,
        )
        .unwrap();
        assert_eq!(task, Task::RefractiveIndex);
        let prompts = String::from_utf8(writer.clone()).unwrap();
        assert!(prompts.contains("Invalid input!\n"));

        let mut reader = BufReader::new(&b"\n"[..]);
        let dir = get_args(
            &eval_output_directory_input,
            Some("./files_for_not_testing/"),
            "o",
            &mut reader,
            &mut writer,
        )
        .unwrap();
        assert_eq!(dir, PathBuf::new());
    }
    #[test]
    fn resolve_args_test() {
        let (dir, geometry, _) = test_dir();
        let part_args = PartialArgs {
            task: Some("g".into()),
            file_path: Some(geometry.to_str().unwrap().into()),
            output_directory: Some(String::new()),
        };
        let mut reader = BufReader::new(&b""[..]);
        let mut writer = Vec::new();
        let args = resolve_args(&part_args, &mut reader, &mut writer).unwrap();
        assert_eq!(args.task, Task::Geometry);
        assert_eq!(args.file_path, Some(geometry));
        assert_eq!(args.output_directory, dir.path());
    }
    #[test]
    fn resolve_args_without_input_file() {
        let part_args = PartialArgs {
            task: Some("a".into()),
            file_path: Some("ignored.json".into()),
            output_directory: None,
        };
        let mut reader = BufReader::new(&b"\n"[..]);
        let mut writer = Vec::new();
        let args = resolve_args(&part_args, &mut reader, &mut writer).unwrap();
        assert_eq!(args.task, Task::AngularDistribution);
        assert_eq!(args.file_path, None);
        assert_eq!(args.output_directory, PathBuf::from("."));
    }
    #[test]
    fn parser_test() {
        let arg_vec = vec![
            "motheye",
            "-t",
            "g",
            "-f",
            "./geometry.json",
            "-o",
            "./output/",
        ];
        let part_args = PartialArgs::parse_from(arg_vec);
        assert_eq!(part_args.task.unwrap(), "g");
        assert_eq!(part_args.file_path.unwrap(), "./geometry.json");
        assert_eq!(part_args.output_directory.unwrap(), "./output/");
    }
}
