use super::{
    AddressComparer, ArtifactComparer, ArtifactLocationComparer, ConversionComparer,
    InvocationComparer, LocationComparer, LogicalLocationComparer, MessageComparer,
    MultiformatMessageStringComparer, NotificationComparer, ReportingDescriptorComparer,
    ReportingDescriptorReferenceComparer, ResultComparer, RunAutomationDetailsComparer,
    RunComparer, SarifLogComparer, ToolComparer, ToolComponentComparer,
    ToolComponentReferenceComparer, VersionControlDetailsComparer, INDEX, PROPERTIES, SCALAR, TEXT,
    TEXTS, TEXT_MAP, URI,
};
use crate::compare::{list, map, nullable, reference_compares, Comparer, Natural};
use crate::model::{
    Conversion, Invocation, Notification, Run, RunAutomationDetails, SarifLog, Tool,
    ToolComponent, ToolComponentReference, VersionControlDetails,
};
use std::cmp::Ordering;

impl Comparer<SarifLog> for SarifLogComparer {
    fn compare(&self, left: &SarifLog, right: &SarifLog) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        URI.compare(&left.schema, &right.schema)
            .then_with(|| Natural.compare(&left.version, &right.version))
            .then_with(|| list(RunComparer).compare(&left.runs, &right.runs))
            .then_with(|| PROPERTIES.compare(&left.properties, &right.properties))
    }
}

impl Comparer<Run> for RunComparer {
    fn compare(&self, left: &Run, right: &Run) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        let components = list(ToolComponentComparer);
        ToolComparer
            .compare(&left.tool, &right.tool)
            .then_with(|| list(InvocationComparer).compare(&left.invocations, &right.invocations))
            .then_with(|| nullable(ConversionComparer).compare(&left.conversion, &right.conversion))
            .then_with(|| TEXT.compare(&left.language, &right.language))
            .then_with(|| {
                list(VersionControlDetailsComparer)
                    .compare(&left.version_control_provenance, &right.version_control_provenance)
            })
            .then_with(|| {
                map(ArtifactLocationComparer)
                    .compare(&left.original_uri_base_ids, &right.original_uri_base_ids)
            })
            .then_with(|| list(ArtifactComparer).compare(&left.artifacts, &right.artifacts))
            .then_with(|| {
                list(LogicalLocationComparer)
                    .compare(&left.logical_locations, &right.logical_locations)
            })
            .then_with(|| list(ResultComparer).compare(&left.results, &right.results))
            .then_with(|| {
                nullable(RunAutomationDetailsComparer)
                    .compare(&left.automation_details, &right.automation_details)
            })
            .then_with(|| {
                list(RunAutomationDetailsComparer)
                    .compare(&left.run_aggregates, &right.run_aggregates)
            })
            .then_with(|| TEXT.compare(&left.baseline_guid, &right.baseline_guid))
            .then_with(|| TEXTS.compare(&left.redaction_tokens, &right.redaction_tokens))
            .then_with(|| TEXT.compare(&left.default_encoding, &right.default_encoding))
            .then_with(|| {
                TEXT.compare(&left.default_source_language, &right.default_source_language)
            })
            .then_with(|| TEXTS.compare(&left.newline_sequences, &right.newline_sequences))
            .then_with(|| SCALAR.compare(&left.column_kind, &right.column_kind))
            .then_with(|| components.compare(&left.taxonomies, &right.taxonomies))
            .then_with(|| list(AddressComparer).compare(&left.addresses, &right.addresses))
            .then_with(|| components.compare(&left.translations, &right.translations))
            .then_with(|| components.compare(&left.policies, &right.policies))
            .then_with(|| PROPERTIES.compare(&left.properties, &right.properties))
    }
}

impl Comparer<Tool> for ToolComparer {
    fn compare(&self, left: &Tool, right: &Tool) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        ToolComponentComparer
            .compare(&left.driver, &right.driver)
            .then_with(|| list(ToolComponentComparer).compare(&left.extensions, &right.extensions))
            .then_with(|| PROPERTIES.compare(&left.properties, &right.properties))
    }
}

impl Comparer<ToolComponent> for ToolComponentComparer {
    fn compare(&self, left: &ToolComponent, right: &ToolComponent) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        let text = nullable(MultiformatMessageStringComparer);
        let descriptors = list(ReportingDescriptorComparer);
        TEXT.compare(&left.guid, &right.guid)
            .then_with(|| TEXT.compare(&left.name, &right.name))
            .then_with(|| TEXT.compare(&left.organization, &right.organization))
            .then_with(|| TEXT.compare(&left.product, &right.product))
            .then_with(|| TEXT.compare(&left.product_suite, &right.product_suite))
            .then_with(|| text.compare(&left.short_description, &right.short_description))
            .then_with(|| text.compare(&left.full_description, &right.full_description))
            .then_with(|| TEXT.compare(&left.full_name, &right.full_name))
            .then_with(|| TEXT.compare(&left.version, &right.version))
            .then_with(|| TEXT.compare(&left.semantic_version, &right.semantic_version))
            .then_with(|| {
                TEXT.compare(&left.dotted_quad_file_version, &right.dotted_quad_file_version)
            })
            .then_with(|| TEXT.compare(&left.release_date_utc, &right.release_date_utc))
            .then_with(|| URI.compare(&left.download_uri, &right.download_uri))
            .then_with(|| URI.compare(&left.information_uri, &right.information_uri))
            .then_with(|| {
                map(MultiformatMessageStringComparer)
                    .compare(&left.global_message_strings, &right.global_message_strings)
            })
            .then_with(|| descriptors.compare(&left.notifications, &right.notifications))
            .then_with(|| descriptors.compare(&left.rules, &right.rules))
            .then_with(|| descriptors.compare(&left.taxa, &right.taxa))
            .then_with(|| list(ArtifactLocationComparer).compare(&left.locations, &right.locations))
            .then_with(|| TEXT.compare(&left.language, &right.language))
            .then_with(|| list(Natural).compare(&left.contents, &right.contents))
            .then_with(|| Natural.compare(&left.is_comprehensive, &right.is_comprehensive))
            .then_with(|| {
                TEXT.compare(
                    &left.localized_data_semantic_version,
                    &right.localized_data_semantic_version,
                )
            })
            .then_with(|| {
                TEXT.compare(
                    &left.minimum_required_localized_data_semantic_version,
                    &right.minimum_required_localized_data_semantic_version,
                )
            })
            .then_with(|| {
                nullable(ToolComponentReferenceComparer)
                    .compare(&left.associated_component, &right.associated_component)
            })
            .then_with(|| {
                list(ToolComponentReferenceComparer)
                    .compare(&left.supported_taxonomies, &right.supported_taxonomies)
            })
            .then_with(|| PROPERTIES.compare(&left.properties, &right.properties))
    }
}

impl Comparer<ToolComponentReference> for ToolComponentReferenceComparer {
    fn compare(&self, left: &ToolComponentReference, right: &ToolComponentReference) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        TEXT.compare(&left.name, &right.name)
            .then_with(|| INDEX.compare(&left.index, &right.index))
            .then_with(|| TEXT.compare(&left.guid, &right.guid))
            .then_with(|| PROPERTIES.compare(&left.properties, &right.properties))
    }
}

impl Comparer<Invocation> for InvocationComparer {
    fn compare(&self, left: &Invocation, right: &Invocation) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        let notifications = list(NotificationComparer);
        TEXT.compare(&left.command_line, &right.command_line)
            .then_with(|| TEXTS.compare(&left.arguments, &right.arguments))
            .then_with(|| TEXT.compare(&left.start_time_utc, &right.start_time_utc))
            .then_with(|| TEXT.compare(&left.end_time_utc, &right.end_time_utc))
            .then_with(|| SCALAR.compare(&left.exit_code, &right.exit_code))
            .then_with(|| {
                notifications.compare(
                    &left.tool_execution_notifications,
                    &right.tool_execution_notifications,
                )
            })
            .then_with(|| {
                notifications.compare(
                    &left.tool_configuration_notifications,
                    &right.tool_configuration_notifications,
                )
            })
            .then_with(|| TEXT.compare(&left.exit_code_description, &right.exit_code_description))
            .then_with(|| TEXT.compare(&left.exit_signal_name, &right.exit_signal_name))
            .then_with(|| SCALAR.compare(&left.exit_signal_number, &right.exit_signal_number))
            .then_with(|| {
                TEXT.compare(
                    &left.process_start_failure_message,
                    &right.process_start_failure_message,
                )
            })
            .then_with(|| Natural.compare(&left.execution_successful, &right.execution_successful))
            .then_with(|| TEXT.compare(&left.machine, &right.machine))
            .then_with(|| TEXT.compare(&left.account, &right.account))
            .then_with(|| SCALAR.compare(&left.process_id, &right.process_id))
            .then_with(|| {
                nullable(ArtifactLocationComparer)
                    .compare(&left.working_directory, &right.working_directory)
            })
            .then_with(|| {
                TEXT_MAP.compare(&left.environment_variables, &right.environment_variables)
            })
            .then_with(|| PROPERTIES.compare(&left.properties, &right.properties))
    }
}

impl Comparer<Notification> for NotificationComparer {
    fn compare(&self, left: &Notification, right: &Notification) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        let descriptor = nullable(ReportingDescriptorReferenceComparer);
        list(LocationComparer)
            .compare(&left.locations, &right.locations)
            .then_with(|| MessageComparer.compare(&left.message, &right.message))
            .then_with(|| Natural.compare(&left.level, &right.level))
            .then_with(|| SCALAR.compare(&left.thread_id, &right.thread_id))
            .then_with(|| TEXT.compare(&left.time_utc, &right.time_utc))
            .then_with(|| descriptor.compare(&left.descriptor, &right.descriptor))
            .then_with(|| descriptor.compare(&left.associated_rule, &right.associated_rule))
            .then_with(|| PROPERTIES.compare(&left.properties, &right.properties))
    }
}

impl Comparer<Conversion> for ConversionComparer {
    fn compare(&self, left: &Conversion, right: &Conversion) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        ToolComparer
            .compare(&left.tool, &right.tool)
            .then_with(|| nullable(InvocationComparer).compare(&left.invocation, &right.invocation))
            .then_with(|| {
                list(ArtifactLocationComparer)
                    .compare(&left.analysis_tool_log_files, &right.analysis_tool_log_files)
            })
            .then_with(|| PROPERTIES.compare(&left.properties, &right.properties))
    }
}

impl Comparer<VersionControlDetails> for VersionControlDetailsComparer {
    fn compare(&self, left: &VersionControlDetails, right: &VersionControlDetails) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        URI.compare(&left.repository_uri, &right.repository_uri)
            .then_with(|| TEXT.compare(&left.revision_id, &right.revision_id))
            .then_with(|| TEXT.compare(&left.branch, &right.branch))
            .then_with(|| TEXT.compare(&left.revision_tag, &right.revision_tag))
            .then_with(|| TEXT.compare(&left.as_of_time_utc, &right.as_of_time_utc))
            .then_with(|| {
                nullable(ArtifactLocationComparer).compare(&left.mapped_to, &right.mapped_to)
            })
            .then_with(|| PROPERTIES.compare(&left.properties, &right.properties))
    }
}

impl Comparer<RunAutomationDetails> for RunAutomationDetailsComparer {
    fn compare(&self, left: &RunAutomationDetails, right: &RunAutomationDetails) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        nullable(MessageComparer)
            .compare(&left.description, &right.description)
            .then_with(|| TEXT.compare(&left.id, &right.id))
            .then_with(|| TEXT.compare(&left.guid, &right.guid))
            .then_with(|| TEXT.compare(&left.correlation_guid, &right.correlation_guid))
            .then_with(|| PROPERTIES.compare(&left.properties, &right.properties))
    }
}
