// Dashboard service - Turns definitions into built dashboards
use crate::application::dashboard_builder::{
    DashboardBuilder, GraphRowOptions, TemplateVariableOptions,
};
use crate::infrastructure::config::compact_query;
use crate::infrastructure::definitions::{DashboardDefinition, RowDefinition};

#[derive(Debug, Clone)]
pub struct DashboardService {
    datasource: String,
}

impl DashboardService {
    pub fn new(datasource: String) -> Self {
        Self { datasource }
    }

    pub fn build(&self, definition: &DashboardDefinition) -> DashboardBuilder {
        let mut builder =
            DashboardBuilder::new(definition.title.clone()).with_datasource(self.datasource.clone());

        for var in &definition.variables {
            builder.add_template_variable(
                var.name.clone(),
                var.label.clone(),
                var.query.clone(),
                TemplateVariableOptions {
                    regex: var.regex.clone(),
                    multi: var.multi,
                    include_all: var.include_all,
                },
            );
        }

        for row in &definition.rows {
            let targets = row.targets.iter().map(|t| compact_query(t));
            builder.add_graph_row(row.title.clone(), targets, row_options(row));
        }

        let dashboard = builder.dashboard();
        tracing::info!(
            "Built '{}': {} rows, {} template variables",
            dashboard.title,
            dashboard.rows.len(),
            dashboard.templating.list.len()
        );

        builder
    }
}

fn row_options(row: &RowDefinition) -> GraphRowOptions {
    GraphRowOptions {
        collapse: row.collapse,
        stack: row.stack,
        y_min: row.y_min,
        y_max: row.y_max,
        y_format: row.y_format.clone(),
    }
}
