//! Record comparers.
//!
//! One zero-sized comparer per record type. Each runs the identity
//! short-circuit, then walks a fixed chain of field comparisons and returns
//! at the first non-equal field. The chain is the record's field declaration
//! order in [`crate::model`]; changing either changes the output order of
//! every canonicalized log, so both are part of the contract.

mod artifact;
mod hdf;
mod log;
mod message;
mod result;
mod rule;

use super::container::{list, map, nullable, ListComparer, MapComparer, Nullable};
use super::primitive::{Index, JsonValue, Natural, Ordinal, Rank, UriText};

pub(crate) const TEXT: Nullable<Ordinal> = nullable(Ordinal);
pub(crate) const TEXTS: Nullable<ListComparer<Ordinal>> = list(Ordinal);
pub(crate) const TEXT_MAP: Nullable<MapComparer<Ordinal>> = map(Ordinal);
pub(crate) const SCALAR: Nullable<Natural> = nullable(Natural);
pub(crate) const INDEX: Index = Index;
pub(crate) const RANK: Rank = Rank;
pub(crate) const URI: Nullable<UriText> = nullable(UriText);
pub(crate) const URIS: Nullable<ListComparer<UriText>> = list(UriText);
pub(crate) const PROPERTIES: Nullable<MapComparer<JsonValue>> = map(JsonValue);

macro_rules! record_comparers {
    ($($name:ident => $record:ident;)*) => {
        $(
            #[doc = concat!("Total order over [`", stringify!($record), "`](crate::model::", stringify!($record), ") records.")]
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $name;

            impl $name {
                /// Process-wide instance
                pub const INSTANCE: Self = Self;
            }
        )*
    };
}

record_comparers! {
    SarifLogComparer => SarifLog;
    RunComparer => Run;
    ToolComparer => Tool;
    ToolComponentComparer => ToolComponent;
    ToolComponentReferenceComparer => ToolComponentReference;
    InvocationComparer => Invocation;
    NotificationComparer => Notification;
    ConversionComparer => Conversion;
    VersionControlDetailsComparer => VersionControlDetails;
    RunAutomationDetailsComparer => RunAutomationDetails;
    ReportingDescriptorComparer => ReportingDescriptor;
    ReportingConfigurationComparer => ReportingConfiguration;
    ReportingDescriptorReferenceComparer => ReportingDescriptorReference;
    ReportingDescriptorRelationshipComparer => ReportingDescriptorRelationship;
    MessageComparer => Message;
    MultiformatMessageStringComparer => MultiformatMessageString;
    ArtifactComparer => Artifact;
    ArtifactContentComparer => ArtifactContent;
    ArtifactLocationComparer => ArtifactLocation;
    ResultComparer => SarifResult;
    LocationComparer => Location;
    PhysicalLocationComparer => PhysicalLocation;
    RegionComparer => Region;
    LogicalLocationComparer => LogicalLocation;
    AddressComparer => Address;
    StackComparer => Stack;
    StackFrameComparer => StackFrame;
    RefComparer => Ref;
}
