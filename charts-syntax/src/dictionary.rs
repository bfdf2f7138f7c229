//! Closed dictionaries of setting and section names.
//!
//! Setting keys are compared after normalization: lowercased with the
//! internal dashes removed, so `width-units` and `widthunits` are the
//! same word. Section names never carry dashes and are only lowercased.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Every recognized setting key, normalized form.
pub static SETTING_NAMES: &[&str] = &[
    "actionenable", "add", "addmeta", "aheadtimespan", "alert",
    "alertexpression", "alertrowstyle", "alertstyle", "alias", "align", "arcs",
    "arrowlength", "arrows", "attribute", "audio", "audioalert",
    "audioonload", "autoheight", "autopadding", "autoperiod", "autoscale",
    "axis", "axislabel", "axistitle", "axistitleright", "bar", "barcount",
    "batchsize", "batchupdate", "borderwidth", "bottomaxis", "bundle",
    "bundled", "buttons", "cache", "capitalize", "caption", "captionstyle",
    "case", "centralizecolumns", "centralizeticks", "changefield", "chartmode",
    "circle", "class", "collapsible", "color", "colorrange", "colors",
    "columnlabelformat", "columns", "connect", "connectvalues", "context",
    "contextheight", "contextpath", "counter", "counterposition", "current",
    "currentperiodstyle", "data", "datatype", "dayformat", "default",
    "defaultcolor", "defaultsize", "depth", "dialogmaximize", "disablealert",
    "disconnect", "disconnectcount", "disconnectednodedisplay",
    "disconnectinterval", "disconnectvalue", "display", "displaydate",
    "displayinlegend", "displaylabels", "displayother", "displaypanels",
    "displaytags", "displayticks", "displaytip", "displaytotal",
    "displayvalues", "dummy", "duration", "effects", "empty",
    "emptyrefreshinterval", "emptythreshold", "enabled", "end", "endtime",
    "endworkingminutes", "entities", "entitiesbatchupdate", "entity",
    "entityexpression", "entitygroup", "entitylabel", "error",
    "errorrefreshinterval", "exact", "exactmatch", "expand", "expandpanels",
    "expandtags", "expiretimespan", "fasten", "fillvalue", "filter",
    "filterrange", "fitsvg", "fontscale", "fontsize", "forecast",
    "forecastname", "forecaststyle", "format", "formataxis", "formatcounter",
    "formatheaders", "formatnumbers", "formatsize", "formattip", "frequency",
    "gradientcount", "gradientintensity", "group", "groupfirst",
    "groupinterpolate", "groupinterpolateextend", "groupkeys", "grouplabel",
    "groupperiod", "groups", "groupstatistic", "header", "headerstyle",
    "heightunits", "hidden", "hide", "hidecolumn", "hideemptycolumns",
    "hideemptyseries", "hideifempty", "horizontal", "horizontalgrid",
    "hourformat", "icon", "iconalertexpression", "iconalertstyle", "iconcolor",
    "iconposition", "iconsize", "id", "init", "interpolate",
    "interpolateboundary", "interpolateextend", "interpolatefill",
    "interpolatefunction", "interpolateperiod", "intervalformat", "is", "join",
    "key", "keys", "keytagexpression", "label", "labelformat", "last",
    "lastmarker", "lastvaluelabel", "layout", "leftaxis", "leftunits",
    "legendlastvalue", "legendposition", "legendticks", "legendvalue", "limit",
    "linearzoom", "link", "linkalertexpression", "linkalertsstyle",
    "linkalertstyle", "linkanimate", "linkcolorrange", "linkcolors",
    "linkdata", "linklabels", "linklabelzoomthreshold", "links",
    "linkthresholds", "linkvalue", "linkwidthorder", "linkwidths", "load",
    "loadfuturedata", "marker", "markerformat", "markers", "max",
    "maxfontsize", "maximum", "maxrange", "maxrangeforce", "maxrangeright",
    "maxrangerightforce", "maxringwidth", "maxthreshold", "menu",
    "mergecolumns", "mergecolumnsbatchupdate", "mergefields", "methodpath",
    "metric", "metriclabel", "min", "mincaptionsize", "minfontsize", "minimum",
    "minorticks", "minrange", "minrangeforce", "minrangeright",
    "minrangerightforce", "minringwidth", "minseverity", "minthreshold",
    "mode", "moving", "movingaverage", "multiple", "multiplecolumn",
    "multipleseries", "negative", "negativestyle", "node",
    "nodealertexpression", "nodealertstyle", "nodecollapse", "nodecolors",
    "nodeconnect", "nodedata", "nodelabels", "nodelabelzoomthreshold",
    "noderadius", "noderadiuses", "nodes", "nodethresholds", "nodevalue",
    "offset", "offsetbottom", "offsetleft", "offsetright", "offsettop",
    "onchange", "onclick", "onseriesclick", "onseriesdoubleclick", "options",
    "origin", "original", "padding", "palette", "paletteticks", "parent",
    "path", "percentile", "percentilemarkers", "percentiles", "period",
    "periods", "pinradius", "placeholders", "pointerposition", "portal",
    "position", "primarykey", "properties", "range", "rangemerge",
    "rangeoffset", "rangeselectend", "rangeselectstart", "rate",
    "ratecounter", "ratio", "refresh", "refreshinterval", "reload",
    "render", "replace", "replaceunderscore", "replacevalue", "responsive",
    "retaintimespan", "retryrefreshinterval", "rightaxis", "ringwidth",
    "rotatelegendticks", "rotatepaletteticks", "rotateticks", "rowalertstyle",
    "rowstyle", "rule", "scale", "scalex", "scaley", "script", "selectormode",
    "series", "serieslabels", "serieslimit", "seriestype", "seriesvalue",
    "server", "serveraggregate", "severity", "severitystyle", "showtagnames",
    "size", "sizename", "sort", "source", "stack", "start", "starttime",
    "startworkingminutes", "statistic", "statistics", "stepline", "style",
    "summarize", "summarizeperiod", "summarizestatistic", "svg", "table",
    "tableheaderstyle", "tag", "tagexpression", "tagoffset", "tags",
    "tagsdropdowns", "tagsdropdownsstyle", "tension", "threshold", "thresholds",
    "ticks", "ticksright", "tickstime", "timeoffset", "timespan", "timezone",
    "title", "tooltip", "topaxis", "topunits", "totalsize", "totalvalue",
    "transpose", "type", "unscale", "update", "updateinterval",
    "updatetimespan", "url", "urllegendticks", "urlparameters", "value",
    "verticalgrid", "widgets", "widgetsperrow", "width", "widthunits", "zoomsvg",
];

/// Every recognized section name.
pub static SECTION_NAMES: &[&str] = &[
    "column", "configuration", "dropdown", "group", "keys", "link", "node",
    "option", "other", "properties", "property", "series", "tag", "tags",
    "threshold", "widget",
];

static SETTING_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| SETTING_NAMES.iter().copied().collect());

static SECTION_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| SECTION_NAMES.iter().copied().collect());

/// Normalize a setting key: lowercase, dashes removed.
pub fn normalize_key(word: &str) -> String {
    word.to_ascii_lowercase().replace('-', "")
}

/// Membership test over the normalized setting dictionary.
pub fn is_known_setting(normalized: &str) -> bool {
    SETTING_SET.contains(normalized)
}

/// Membership test over the section dictionary.
pub fn is_known_section(name: &str) -> bool {
    SECTION_SET.contains(name)
}
