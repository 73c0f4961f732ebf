use crate::error::PredictionError;

/// Placement coordinates and request options for one run. Built once from
/// CLI flags and read-only afterwards.
#[derive(Debug, Clone)]
pub struct PredictionConfig {
    project: String,
    location: String,
    catalog: String,
    branch: Option<String>,
    serving_config: String,
    page_size: u32,
    filter: Option<String>,
    experiment: Option<String>,
}

impl PredictionConfig {
    /// Rejects empty placement fields so every path this config produces is
    /// well formed.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        project: &str,
        location: &str,
        catalog: &str,
        branch: Option<&str>,
        serving_config: &str,
        page_size: u32,
        filter: Option<String>,
        experiment: Option<String>,
    ) -> Result<Self, PredictionError> {
        for (flag, value) in [
            ("--project", project),
            ("--location", location),
            ("--catalog", catalog),
            ("--serving-config", serving_config),
        ] {
            if value.is_empty() {
                return Err(PredictionError::Validation(format!(
                    "missing required flag: {flag}"
                )));
            }
        }
        if branch == Some("") {
            return Err(PredictionError::Validation(
                "missing required flag: --branch".to_string(),
            ));
        }

        Ok(Self {
            project: project.to_string(),
            location: location.to_string(),
            catalog: catalog.to_string(),
            branch: branch.map(str::to_string),
            serving_config: serving_config.to_string(),
            page_size,
            filter,
            experiment,
        })
    }

    /// Serving-config resource path the predict call is addressed to.
    pub fn placement(&self) -> String {
        format!(
            "projects/{}/locations/{}/catalogs/{}/servingConfigs/{}",
            self.project, self.location, self.catalog, self.serving_config
        )
    }

    /// Branch-qualified resource path for a product id. `None` when the run
    /// carries no branch to resolve titles against.
    pub fn product_name(&self, id: &str) -> Option<String> {
        self.branch.as_ref().map(|branch| {
            format!(
                "projects/{}/locations/{}/catalogs/{}/branches/{}/products/{}",
                self.project, self.location, self.catalog, branch, id
            )
        })
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn catalog(&self) -> &str {
        &self.catalog
    }

    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    pub fn serving_config(&self) -> &str {
        &self.serving_config
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn experiment(&self) -> Option<&str> {
        self.experiment.as_deref()
    }
}
