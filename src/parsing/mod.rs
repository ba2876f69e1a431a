//! Readers and writers for the tabular input and output of the CLI.
//!
//! ## Table Layout
//!
//! ```text
//! sequence 1,sequence 2
//! ATCGT,ACGT
//! GATTACA,GCATGCU
//! ```
//!
//! becomes
//!
//! ```text
//! sequence 1,sequence 2,alignment text,alignment score
//! ATCGT,ACGT,ATCGT A-CGT,2
//! GATTACA,GCATGCU,GATTACA GCATGCU,-1
//! ```
//!
//! | Extension | Delimiter |
//! |-----------|-----------|
//! | `.csv`    | `,`       |
//! | `.tsv`, `.txt` | tab  |
//!
//! Any of these may carry a trailing `.gz`.

pub mod table;
