pub use anyhow::{ensure, format_err, Context as _, Result};
pub use itertools::Itertools as _;
pub use log::{info, warn};
pub use ndarray::{Array2, Array3};
pub use rand::{prelude::*, rngs::StdRng};
pub use serde::{Deserialize, Serialize};
pub use std::{
    fmt::Debug,
    fs, mem,
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::Arc,
};
