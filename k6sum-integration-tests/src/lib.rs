//! End-to-end pipeline tests live under `tests/`.
