/// Generates the async entry point for a single-protocol sweep scenario.
///
/// Every such scenario is the same pipeline (load the scenario's TOML, run
/// the configured protocol over the rate grid, save the curve), so the
/// scenario files only declare their name, results directory, and
/// configuration path.
#[macro_export]
macro_rules! sweep_simulation {
    (
        $fn_name:ident,
        $display_name:expr,
        $results_dir:expr,
        $config_file:expr
    ) => {
        pub async fn $fn_name() -> Result<(), $crate::config::ConfigError> {
            let runner = $crate::scenarios::sweep_runner::SweepRunner::new(
                $display_name,
                $results_dir,
                $config_file,
            );
            runner.run().await
        }
    };
}
