pub const DEFAULT_STYLES: &str = r##"
{
    "Environment Base": {
        "version": 8,
        "name": "Environment Base",
        "metadata": {
            "attribution": "Esri, HERE, Garmin, FAO, NOAA, USGS"
        },
        "center": [-105.5, 39.0],
        "zoom": 6,
        "sprite": {
            "image": "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAACAAAAAQCAYAAAB3AH1ZAAAAXUlEQVR42mNgGAW0BikM/0nWIzfh/39cmGTLYZgalpPkCGTLiXUEMZYT5QhslhPjCKo4AJ/lhBxBsQOIsRyfIyhyACmW43LE0A6BQZEGKM0FA14ODIqScFDUBfQEAOjemSv/YA9DAAAAAElFTkSuQmCC",
            "index": {
                "gauge": {"x": 0, "y": 0, "width": 16, "height": 16, "pixelRatio": 1},
                "reservoir": {"x": 16, "y": 0, "width": 16, "height": 16, "pixelRatio": 1}
            }
        },
        "glyphs": "https://basemaps.arcgis.com/arcgis/rest/services/World_Basemap_v2/VectorTileServer/resources/fonts/{fontstack}/{range}.pbf",
        "sources": {
            "esri": {
                "type": "vector",
                "tiles": ["https://basemaps.arcgis.com/arcgis/rest/services/World_Basemap_v2/VectorTileServer/tile/{z}/{y}/{x}.pbf"],
                "maxzoom": 15,
                "attribution": "Esri"
            }
        },
        "layers": [
            {
                "id": "background",
                "type": "background",
                "paint": {"background-color": "#f2efe9"}
            },
            {
                "id": "land",
                "type": "fill",
                "source": "esri",
                "source-layer": "Land",
                "paint": {"fill-color": "#e8e4d8"}
            },
            {
                "id": "vegetation",
                "type": "fill",
                "source": "esri",
                "source-layer": "Vegetation small scale",
                "maxzoom": 12,
                "paint": {
                    "fill-color": "#d4e6c3",
                    "fill-opacity": {"stops": [[4, 0.3], [10, 0.8]]}
                }
            },
            {
                "id": "water-area",
                "type": "fill",
                "source": "esri",
                "source-layer": "Water area",
                "filter": ["==", "$type", "Polygon"],
                "paint": {
                    "fill-color": "#8dd6fc",
                    "fill-outline-color": "#19afff"
                }
            },
            {
                "id": "waterway",
                "type": "line",
                "source": "esri",
                "source-layer": "Water line",
                "minzoom": 5,
                "filter": ["in", "_symbol", 0, 1],
                "layout": {
                    "line-cap": "round",
                    "line-join": "round"
                },
                "paint": {
                    "line-color": "#19afff",
                    "line-width": {"base": 1.3, "stops": [[5, 0.5], [10, 1.5], [16, 4]]}
                }
            },
            {
                "id": "boundary-state",
                "type": "line",
                "source": "esri",
                "source-layer": "Boundary line",
                "minzoom": 3,
                "filter": ["==", "_symbol", 1],
                "paint": {
                    "line-color": "#a9a9a9",
                    "line-width": {"stops": [[3, 1], [10, 2]]},
                    "line-dasharray": [4, 2]
                }
            },
            {
                "id": "boundary-country",
                "type": "line",
                "source": "esri",
                "source-layer": "Boundary line",
                "filter": ["==", "_symbol", 0],
                "paint": {
                    "line-color": "#555555",
                    "line-width": 1.5
                }
            },
            {
                "id": "stream-gauges",
                "type": "symbol",
                "source": "esri",
                "source-layer": "Water point",
                "minzoom": 8,
                "filter": ["all", ["==", "$type", "Point"], ["==", "_symbol", 0]],
                "layout": {
                    "icon-image": "gauge",
                    "icon-size": {"stops": [[8, 0.5], [14, 1]]},
                    "icon-allow-overlap": true
                }
            },
            {
                "id": "reservoirs",
                "type": "symbol",
                "source": "esri",
                "source-layer": "Water point",
                "minzoom": 8,
                "filter": ["all", ["==", "$type", "Point"], ["==", "_symbol", 1]],
                "layout": {
                    "icon-image": "reservoir",
                    "icon-size": {"stops": [[8, 0.5], [14, 1]]}
                }
            },
            {
                "id": "water-label",
                "type": "symbol",
                "source": "esri",
                "source-layer": "Water area/label",
                "minzoom": 6,
                "filter": ["has", "_name"],
                "layout": {
                    "text-field": "{_name}",
                    "text-font": ["Arial Italic"],
                    "text-size": {"stops": [[6, 10], [14, 14]]},
                    "text-max-width": 8
                },
                "paint": {
                    "text-color": "#1e5aa0",
                    "text-halo-color": "rgba(255, 255, 255, 0.8)",
                    "text-halo-width": 1
                }
            },
            {
                "id": "place-label",
                "type": "symbol",
                "source": "esri",
                "source-layer": "City small scale",
                "layout": {
                    "text-field": "{_name}",
                    "text-font": ["Arial Regular"],
                    "text-size": {"base": 1.2, "stops": [[4, 10], [10, 16]]},
                    "text-anchor": "center"
                },
                "paint": {
                    "text-color": "#333333",
                    "text-halo-color": "#ffffff",
                    "text-halo-width": 1.5
                }
            }
        ]
    },
    "Environment Watersheds": {
        "version": 8,
        "name": "Environment Watersheds",
        "sprite": "https://basemaps.arcgis.com/arcgis/rest/services/World_Basemap_v2/VectorTileServer/resources/sprites/sprite",
        "glyphs": "https://basemaps.arcgis.com/arcgis/rest/services/World_Basemap_v2/VectorTileServer/resources/fonts/{fontstack}/{range}.pbf",
        "sources": {
            "wbd": {
                "type": "vector",
                "tiles": ["https://tiles.arcgis.com/tiles/P3ePLMYs2RVChkJx/arcgis/rest/services/Watershed_Boundary_Dataset_HUC_8s/VectorTileServer/tile/{z}/{y}/{x}.pbf"],
                "minzoom": 2,
                "maxzoom": 14,
                "attribution": "USGS Watershed Boundary Dataset"
            }
        },
        "layers": [
            {
                "id": "huc2-fill",
                "type": "fill",
                "source": "wbd",
                "source-layer": "WBDHU2",
                "paint": {
                    "fill-color": "rgba(30, 144, 255, 0.08)",
                    "fill-opacity": {"stops": [[3, 1], [8, 0.4]]}
                }
            },
            {
                "id": "huc8-selected",
                "type": "fill",
                "source": "wbd",
                "source-layer": "WBDHU8",
                "minzoom": 6,
                "filter": ["all", ["==", "$type", "Polygon"], ["has", "huc8"], ["==", "selected", true]],
                "layout": {"visibility": "visible"},
                "paint": {"fill-color": "rgba(255, 165, 0, 0.35)"}
            },
            {
                "id": "huc2-line",
                "type": "line",
                "source": "wbd",
                "source-layer": "WBDHU2",
                "paint": {
                    "line-color": "#00008B",
                    "line-width": {"base": 1.5, "stops": [[3, 1], [10, 3]]}
                }
            },
            {
                "id": "huc4-line",
                "type": "line",
                "source": "wbd",
                "source-layer": "WBDHU4",
                "minzoom": 5,
                "paint": {
                    "line-color": "#008B8B",
                    "line-width": {"stops": [[5, 0.75], [12, 2]]}
                }
            },
            {
                "id": "huc8-line",
                "type": "line",
                "source": "wbd",
                "source-layer": "WBDHU8",
                "minzoom": 7,
                "paint": {
                    "line-color": "#8A2BE2",
                    "line-width": 0.75,
                    "line-dasharray": [3, 2]
                }
            },
            {
                "id": "huc2-label",
                "type": "symbol",
                "source": "wbd",
                "source-layer": "WBDHU2",
                "maxzoom": 7,
                "filter": ["has", "name"],
                "layout": {
                    "text-field": "{name}",
                    "text-font": ["Arial Bold"],
                    "text-size": 12,
                    "text-transform": "uppercase"
                },
                "paint": {
                    "text-color": "#00008B",
                    "text-halo-color": "#FFFFFF",
                    "text-halo-width": 1
                }
            },
            {
                "id": "huc8-label",
                "type": "symbol",
                "source": "wbd",
                "source-layer": "WBDHU8",
                "minzoom": 8,
                "filter": ["all", ["has", "name"], ["has", "huc8"]],
                "layout": {
                    "text-field": "{name}\n{huc8}",
                    "text-font": ["Arial Regular"],
                    "text-size": {"type": "interval", "stops": [[8, 10], [11, 12]]}
                },
                "paint": {
                    "text-color": "#8A2BE2",
                    "text-halo-color": "rgba(255, 255, 255, 0.9)",
                    "text-halo-width": 1
                }
            }
        ]
    },
    "Border 000000": {
        "stroke": {"color": "#000000", "width": 1},
        "fill": {"color": "rgba(255, 255, 255, 0)"}
    },
    "Border CCCCCC": {
        "stroke": {"color": "#CCCCCC", "width": 1},
        "fill": {"color": "rgba(255, 255, 255, 0)"}
    },
    "Border FF0000": {
        "stroke": {"color": "#FF0000", "width": 1},
        "fill": {"color": "rgba(255, 255, 255, 0)"}
    },
    "Border 1E90FF": {
        "stroke": {"color": "#1E90FF", "width": 1},
        "fill": {"color": "rgba(255, 255, 255, 0)"}
    },
    "Border 00008B": {
        "stroke": {"color": "#00008B", "width": 1},
        "fill": {"color": "rgba(255, 255, 255, 0)"}
    },
    "Border 8B4513": {
        "stroke": {"color": "#8B4513", "width": 1},
        "fill": {"color": "rgba(255, 255, 255, 0)"}
    },
    "Border 006400": {
        "stroke": {"color": "#006400", "width": 1},
        "fill": {"color": "rgba(255, 255, 255, 0)"}
    },
    "Border A9A9A9": {
        "stroke": {"color": "#A9A9A9", "width": 1},
        "fill": {"color": "rgba(255, 255, 255, 0)"}
    },
    "County Border": {
        "stroke": {"color": "rgba(192, 192, 192, 1)", "width": 2}
    },
    "State Border": {
        "stroke": {"color": "#a9a9a9", "width": 2}
    },
    "Tribal Land": {
        "fill": {"color": "#008000"}
    },
    "Federal Land": {
        "fill": {"color": "#F08080"}
    },
    "RMA": {
        "stroke": {"color": "#00dd00", "width": 2}
    },
    "Cluster": {
        "stroke": {"color": "rgba(255, 0, 0, 1)", "width": 2}
    },
    "USDM County": {
        "stroke": {"color": "#000000", "width": 0.5},
        "fill": {"color": "rgba(255, 255, 255, 0)"}
    },
    "USDM State": {
        "stroke": {"color": "#000000", "width": 3},
        "fill": {"color": "rgba(255, 255, 255, 0)"}
    },
    "USDM Hidden State": {
        "stroke": {"color": "rgba(255, 255, 255, 0)", "width": 0},
        "fill": {"color": "rgba(255, 255, 255, 0)"}
    },
    "USDM Major Rivers": {
        "stroke": {"color": "#19afff", "width": 1.5},
        "fill": {"color": "rgba(255, 255, 255, 0)"}
    },
    "USDM Lakes": {
        "stroke": {"color": "#19afff", "width": 1.5},
        "fill": {"color": "#8dd6fc"}
    },
    "USDM Mask": {
        "stroke": {"color": "rgba(255, 255, 255, 1)", "width": 1},
        "fill": {"color": "rgba(255, 255, 255, 1)"}
    },
    "USDM": {
        "property": "DM",
        "classes": {
            "0": {"fill": {"color": "rgba(255, 255, 0, 1)"}},
            "1": {"fill": {"color": "rgba(252, 211, 127, 1)"}},
            "2": {"fill": {"color": "rgba(255, 170, 0, 1)"}},
            "3": {"fill": {"color": "rgba(230, 0, 0, 1)"}},
            "4": {"fill": {"color": "rgba(115, 0, 0, 1)"}}
        },
        "default": {"fill": {"color": "rgba(0, 0, 0, 0)"}}
    },
    "USDM Outline": {
        "property": "DM",
        "classes": {
            "0": {"fill": {"color": "rgba(0, 0, 0, 0)"}, "stroke": {"color": "rgba(255, 255, 0, 1)", "width": 2}},
            "1": {"fill": {"color": "rgba(0, 0, 0, 0)"}, "stroke": {"color": "rgba(252, 211, 127, 1)", "width": 2}},
            "2": {"fill": {"color": "rgba(0, 0, 0, 0)"}, "stroke": {"color": "rgba(255, 170, 0, 1)", "width": 2}},
            "3": {"fill": {"color": "rgba(0, 0, 0, 0)"}, "stroke": {"color": "rgba(230, 0, 0, 1)", "width": 2}},
            "4": {"fill": {"color": "rgba(0, 0, 0, 0)"}, "stroke": {"color": "rgba(115, 0, 0, 1)", "width": 2}}
        }
    },
    "USDM Points": {
        "property": "DM",
        "classes": {
            "1": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(255, 255, 0, 1)"}, "stroke": {"color": "rgba(0, 0, 0, 1)", "width": 1}}},
            "2": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(252, 211, 127, 1)"}, "stroke": {"color": "rgba(0, 0, 0, 1)", "width": 1}}},
            "3": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(255, 170, 0, 1)"}, "stroke": {"color": "rgba(0, 0, 0, 1)", "width": 1}}},
            "4": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(230, 0, 0, 1)"}, "stroke": {"color": "rgba(0, 0, 0, 1)", "width": 1}}},
            "5": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(115, 0, 0, 1)"}, "stroke": {"color": "rgba(0, 0, 0, 1)", "width": 1}}},
            "6": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(255, 255, 255, 1)"}, "stroke": {"color": "rgba(0, 0, 0, 1)", "width": 1}}},
            "7": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(128, 128, 128, 1)"}, "stroke": {"color": "rgba(0, 0, 0, 1)", "width": 1}}}
        }
    },
    "CoCoRaHS": {
        "property": "Category",
        "classes": {
            "Severely Dry": {"image": {"type": "regular_shape", "points": 3, "radius": 10, "angle": 0, "fill": {"color": "rgba(186, 110, 110, 1)"}, "stroke": {"color": "rgba(130, 0, 0, 1)", "width": 2}}},
            "Moderately Dry": {"image": {"type": "regular_shape", "points": 3, "radius": 10, "angle": 0, "fill": {"color": "rgba(234, 146, 146, 1)"}, "stroke": {"color": "rgba(250, 0, 0, 1)", "width": 2}}},
            "Mildly Dry": {"image": {"type": "regular_shape", "points": 3, "radius": 10, "angle": 0, "fill": {"color": "rgba(232, 188, 112, 1)"}, "stroke": {"color": "rgba(230, 170, 45, 1)", "width": 2}}},
            "Near Normal": {"image": {"type": "regular_shape", "points": 3, "radius": 10, "angle": 0, "fill": {"color": "rgba(221, 221, 221, 1)"}, "stroke": {"color": "rgba(187, 187, 187, 1)", "width": 2}}},
            "Mildly Wet": {"image": {"type": "regular_shape", "points": 3, "radius": 10, "angle": 0, "fill": {"color": "rgba(113, 200, 105, 1)"}, "stroke": {"color": "rgba(0, 170, 0, 1)", "width": 2}}},
            "Moderately Wet": {"image": {"type": "regular_shape", "points": 3, "radius": 10, "angle": 0, "fill": {"color": "rgba(111, 135, 232, 1)"}, "stroke": {"color": "rgba(0, 40, 255, 1)", "width": 2}}},
            "Severely Wet": {"image": {"type": "regular_shape", "points": 3, "radius": 10, "angle": 0, "fill": {"color": "rgba(186, 121, 228, 1)"}, "stroke": {"color": "rgba(130, 0, 220, 1)", "width": 2}}}
        },
        "default": {"image": {"type": "regular_shape", "points": 3, "radius": 10, "angle": 0, "fill": {"color": "rgba(110, 110, 110, 0)"}, "stroke": {"color": "rgba(0, 0, 0, 0)", "width": 2}}}
    },
    "Water Watch": {
        "property": "class",
        "classes": {
            "0": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(255, 255, 255, 0)"}, "stroke": {"color": "rgba(0, 0, 0, 1)", "width": 1}}},
            "1": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(255, 0, 0, 1)"}}},
            "2": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(177, 33, 33, 1)"}}},
            "3": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(255, 164, 0, 1)"}}},
            "4": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(0, 255, 0, 1)"}}},
            "5": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(64, 223, 208, 1)"}}},
            "6": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(0, 0, 255, 1)"}}},
            "7": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(1, 1, 1, 1)"}}}
        }
    },
    "Trends": {
        "property": "trend",
        "classes": {
            "-1": {"image": {"type": "circle", "radius": 2, "fill": {"color": "rgba(255, 0, 0, 1)"}, "stroke": {"color": "rgba(255, 255, 255, 1)", "width": 1}}},
            "0": {"image": {"type": "circle", "radius": 2, "fill": {"color": "rgba(162, 162, 162, 1)"}, "stroke": {"color": "rgba(255, 255, 255, 1)", "width": 1}}},
            "1": {"image": {"type": "circle", "radius": 2, "fill": {"color": "rgba(0, 0, 255, 1)"}, "stroke": {"color": "rgba(255, 255, 255, 1)", "width": 1}}}
        }
    },
    "Trends Zoom": {
        "property": "trend",
        "classes": {
            "-1": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(255, 0, 0, 1)"}, "stroke": {"color": "rgba(255, 255, 255, 1)", "width": 1}}},
            "0": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(162, 162, 162, 1)"}, "stroke": {"color": "rgba(255, 255, 255, 1)", "width": 1}}},
            "1": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(0, 0, 255, 1)"}, "stroke": {"color": "rgba(255, 255, 255, 1)", "width": 1}}}
        }
    },
    "Grasscast": {
        "property": "category",
        "classes": {
            "red": {"fill": {"color": "rgba(255, 10, 10, 0.5)"}},
            "orange": {"fill": {"color": "rgba(255, 116, 61, 0.5)"}},
            "yellow": {"fill": {"color": "rgba(255, 255, 0, 0.5)"}},
            "limegreen": {"fill": {"color": "rgba(0, 255, 0, 0.5)"}},
            "lightblue": {"fill": {"color": "rgba(0, 255, 255, 0.5)"}},
            "blue": {"fill": {"color": "rgba(0, 128, 255, 0.5)"}},
            "darkblue": {"fill": {"color": "rgba(0, 0, 204, 0.5)"}},
            "white": {"fill": {"color": "rgba(255, 255, 255, 0.5)"}}
        },
        "default": {"stroke": {"color": "#ff0000", "width": 2}}
    },
    "Station Default": {
        "image": {"type": "circle", "radius": 2, "fill": {"color": "rgba(0, 255, 0, 1)"}, "stroke": {"color": "rgba(0, 0, 0, 1)", "width": 1}}
    },
    "Station Zoom Default": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(0, 255, 0, 1)"}, "stroke": {"color": "rgba(0, 0, 0, 1)", "width": 1}}
    },
    "Station Highlight": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(0, 255, 255, 1)"}, "stroke": {"color": "rgba(0, 200, 200, 1)", "width": 1}}
    },
    "Station Selected": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(255, 0, 0, 1)"}, "stroke": {"color": "rgba(192, 0, 0, 1)", "width": 1}}
    },
    "Station Snotel": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "#00FFFF"}, "stroke": {"color": "#48D1CC", "width": 1}}
    },
    "Station Wells": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "#FF8C00"}, "stroke": {"color": "#cc7000", "width": 1}}
    },
    "Station Reservoirs": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "#008000"}, "stroke": {"color": "#004d00", "width": 1}}
    },
    "Station Hidden": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(255, 255, 255, 0.0)"}, "stroke": {"color": "rgba(255, 255, 255, 0.0)", "width": 1}}
    },
    "Border 00FF00": {
        "stroke": {"color": "#00FF00", "width": 1}, "fill": {"color": "rgba(255, 255, 255, 0)"}
    },
    "Border 0000FF": {
        "stroke": {"color": "#0000FF", "width": 1}, "fill": {"color": "rgba(255, 255, 255, 0)"}
    },
    "Border FFFF00": {
        "stroke": {"color": "#FFFF00", "width": 1}, "fill": {"color": "rgba(255, 255, 255, 0)"}
    },
    "Border FFFFFF": {
        "stroke": {"color": "#FFFFFF", "width": 1}, "fill": {"color": "rgba(255, 255, 255, 0)"}
    },
    "Border F00000": {
        "stroke": {"color": "#F00000", "width": 1}, "fill": {"color": "rgba(255, 255, 255, 0)"}
    },
    "Border 0F0000": {
        "stroke": {"color": "#0F0000", "width": 1}, "fill": {"color": "rgba(255, 255, 255, 0)"}
    },
    "Border 008B8B": {
        "stroke": {"color": "#008B8B", "width": 1}, "fill": {"color": "rgba(255, 255, 255, 0)"}
    },
    "Border 8A2BE2": {
        "stroke": {"color": "#8A2BE2", "width": 1}, "fill": {"color": "rgba(255, 255, 255, 0)"}
    },
    "Border B8860B": {
        "stroke": {"color": "#B8860B", "width": 1}, "fill": {"color": "rgba(255, 255, 255, 0)"}
    },
    "Border B22222": {
        "stroke": {"color": "#B22222", "width": 1}, "fill": {"color": "rgba(255, 255, 255, 0)"}
    },
    "Border F08080": {
        "stroke": {"color": "#F08080", "width": 1}, "fill": {"color": "rgba(255, 255, 255, 0)"}
    },
    "Border FF4500": {
        "stroke": {"color": "#FF4500", "width": 1}, "fill": {"color": "rgba(255, 255, 255, 0)"}
    },
    "Border FFA500": {
        "stroke": {"color": "#FFA500", "width": 1}, "fill": {"color": "rgba(255, 255, 255, 0)"}
    },
    "Border FF00FF": {
        "stroke": {"color": "#FF00FF", "width": 1}, "fill": {"color": "rgba(255, 255, 255, 0)"}
    },
    "Border 555555": {
        "stroke": {"color": "#555555", "width": 1}, "fill": {"color": "rgba(255, 255, 255, 0)"}
    },
    "Border 00FFFF": {
        "stroke": {"color": "#00FFFF", "width": 1}, "fill": {"color": "rgba(255, 255, 255, 0)"}
    },
    "Border USDM Reference State": {
        "stroke": {"color": "#000000", "width": 1.5}, "fill": {"color": "rgba(255, 255, 255, 0)"}
    },
    "USDM State Overlay": {
        "stroke": {"color": "rgba(255, 255, 255, 0)", "width": 2}, "fill": {"color": "rgba(255, 255, 255, 0)"}
    },
    "USDM Hidden State Overlay": {
        "stroke": {"color": "rgba(255, 255, 255, 1)", "width": 4}, "fill": {"color": "rgba(255, 255, 255, 1)"}
    },
    "Fill 002673": {
        "stroke": {"color": "rgba(255, 255, 255, 0)", "width": 1}, "fill": {"color": "#002673"}
    },
    "CoCoRaHS Dyn": {
        "property": "Category",
        "classes": {
            "Severely Dry": {"image": {"type": "regular_shape", "points": 3, "radius": 10, "angle": 0, "fill": {"color": "rgba(186, 110, 110, 1)"}, "stroke": {"color": "rgba(130, 0, 0, 1)", "width": 2}}},
            "Moderately Dry": {"image": {"type": "regular_shape", "points": 3, "radius": 10, "angle": 0, "fill": {"color": "rgba(234, 146, 146, 1)"}, "stroke": {"color": "rgba(250, 0, 0, 1)", "width": 2}}},
            "Mildly Dry": {"image": {"type": "regular_shape", "points": 3, "radius": 10, "angle": 0, "fill": {"color": "rgba(232, 188, 112, 1)"}, "stroke": {"color": "rgba(230, 170, 45, 1)", "width": 2}}},
            "Near normal": {"image": {"type": "regular_shape", "points": 3, "radius": 10, "angle": 0, "fill": {"color": "rgba(221, 221, 221, 1)"}, "stroke": {"color": "rgba(187, 187, 187, 1)", "width": 2}}},
            "Mildly Wet": {"image": {"type": "regular_shape", "points": 3, "radius": 10, "angle": 0, "fill": {"color": "rgba(113, 200, 105, 1)"}, "stroke": {"color": "rgba(0, 170, 0, 1)", "width": 2}}},
            "Moderately Wet": {"image": {"type": "regular_shape", "points": 3, "radius": 10, "angle": 0, "fill": {"color": "rgba(111, 135, 232, 1)"}, "stroke": {"color": "rgba(0, 40, 255, 1)", "width": 2}}},
            "Severely Wet": {"image": {"type": "regular_shape", "points": 3, "radius": 10, "angle": 0, "fill": {"color": "rgba(186, 121, 228, 1)"}, "stroke": {"color": "rgba(130, 0, 220, 1)", "width": 2}}}
        },
        "default": {"image": {"type": "regular_shape", "points": 3, "radius": 10, "angle": 0, "fill": {"color": "rgba(110, 110, 110, 0)"}, "stroke": {"color": "rgba(0, 0, 0, 0)", "width": 2}}}
    },
    "CoCoRaHS Square": {
        "property": "Category",
        "classes": {
            "Severely Dry": {"image": {"type": "regular_shape", "points": 4, "radius": 10, "angle": 0.7853981633974483, "fill": {"color": "rgba(115, 0, 0, 1)"}, "stroke": {"color": "rgba(255, 255, 255, 1)", "width": 2}}},
            "Moderately Dry": {"image": {"type": "regular_shape", "points": 4, "radius": 10, "angle": 0.7853981633974483, "fill": {"color": "rgba(215, 48, 39, 1)"}, "stroke": {"color": "rgba(255, 255, 255, 1)", "width": 2}}},
            "Mildly Dry": {"image": {"type": "regular_shape", "points": 4, "radius": 10, "angle": 0.7853981633974483, "fill": {"color": "rgba(252, 141, 89, 1)"}, "stroke": {"color": "rgba(255, 255, 255, 1)", "width": 2}}},
            "Near Normal": {"image": {"type": "regular_shape", "points": 4, "radius": 10, "angle": 0.7853981633974483, "fill": {"color": "rgba(133, 133, 133, 1)"}, "stroke": {"color": "rgba(255, 255, 255, 1)", "width": 2}}},
            "Mildly Wet": {"image": {"type": "regular_shape", "points": 4, "radius": 10, "angle": 0.7853981633974483, "fill": {"color": "rgba(115, 223, 255, 1)"}, "stroke": {"color": "rgba(255, 255, 255, 1)", "width": 2}}},
            "Moderately Wet": {"image": {"type": "regular_shape", "points": 4, "radius": 10, "angle": 0.7853981633974483, "fill": {"color": "rgba(0, 112, 255, 1)"}, "stroke": {"color": "rgba(255, 255, 255, 1)", "width": 2}}},
            "Severely Wet": {"image": {"type": "regular_shape", "points": 4, "radius": 10, "angle": 0.7853981633974483, "fill": {"color": "rgba(0, 38, 115, 1)"}, "stroke": {"color": "rgba(255, 255, 255, 1)", "width": 2}}}
        },
        "default": {"image": {"type": "regular_shape", "points": 4, "radius": 10, "angle": 0.7853981633974483, "fill": {"color": "rgba(110, 110, 110, 0)"}, "stroke": {"color": "rgba(0, 0, 0, 0)", "width": 2}}}
    },
    "CoCoRaHS Highlight": {
        "image": {"type": "regular_shape", "points": 3, "radius": 10, "angle": 0, "fill": {"color": "rgba(0, 255, 255, 1)"}, "stroke": {"color": "rgba(0, 245, 245, 1)", "width": 2}}
    },
    "CoCoRaHS Square Highlight": {
        "image": {"type": "regular_shape", "points": 4, "radius": 10, "angle": 0.7853981633974483, "fill": {"color": "rgba(0, 255, 255, 1)"}, "stroke": {"color": "rgba(0, 245, 245, 1)", "width": 2}}
    },
    "CMOR": {
        "property": "Category",
        "classes": {
            "SeverelyDry": {"image": {"type": "regular_shape", "points": 4, "radius": 10, "angle": 0.7853981633974483, "fill": {"color": "rgba(186, 110, 110, 1)"}, "stroke": {"color": "rgba(130, 0, 0, 1)", "width": 2}}},
            "ModeratelyDry": {"image": {"type": "regular_shape", "points": 4, "radius": 10, "angle": 0.7853981633974483, "fill": {"color": "rgba(234, 146, 146, 1)"}, "stroke": {"color": "rgba(250, 0, 0, 1)", "width": 2}}},
            "MildlyDry": {"image": {"type": "regular_shape", "points": 4, "radius": 10, "angle": 0.7853981633974483, "fill": {"color": "rgba(232, 188, 112, 1)"}, "stroke": {"color": "rgba(230, 170, 45, 1)", "width": 2}}},
            "NearNormal": {"image": {"type": "regular_shape", "points": 4, "radius": 10, "angle": 0.7853981633974483, "fill": {"color": "rgba(221, 221, 221, 1)"}, "stroke": {"color": "rgba(187, 187, 187, 1)", "width": 2}}},
            "MildlyWet": {"image": {"type": "regular_shape", "points": 4, "radius": 10, "angle": 0.7853981633974483, "fill": {"color": "rgba(113, 200, 105, 1)"}, "stroke": {"color": "rgba(0, 170, 0, 1)", "width": 2}}},
            "ModeratelyWet": {"image": {"type": "regular_shape", "points": 4, "radius": 10, "angle": 0.7853981633974483, "fill": {"color": "rgba(111, 135, 232, 1)"}, "stroke": {"color": "rgba(0, 40, 255, 1)", "width": 2}}},
            "SeverelyWet": {"image": {"type": "regular_shape", "points": 4, "radius": 10, "angle": 0.7853981633974483, "fill": {"color": "rgba(186, 121, 228, 1)"}, "stroke": {"color": "rgba(130, 0, 220, 1)", "width": 2}}}
        },
        "default": {"image": {"type": "regular_shape", "points": 4, "radius": 10, "angle": 0.7853981633974483, "fill": {"color": "rgba(110, 110, 110, 0)"}, "stroke": {"color": "rgba(0, 0, 0, 0)", "width": 2}}}
    },
    "CMOR Mt": {
        "property": "Category",
        "classes": {
            "Severely_Dry": {"image": {"type": "regular_shape", "points": 4, "radius": 10, "angle": 0.7853981633974483, "fill": {"color": "rgba(186, 110, 110, 1)"}, "stroke": {"color": "rgba(130, 0, 0, 1)", "width": 2}}},
            "Moderately_Dry": {"image": {"type": "regular_shape", "points": 4, "radius": 10, "angle": 0.7853981633974483, "fill": {"color": "rgba(234, 146, 146, 1)"}, "stroke": {"color": "rgba(250, 0, 0, 1)", "width": 2}}},
            "Mildly_Dry": {"image": {"type": "regular_shape", "points": 4, "radius": 10, "angle": 0.7853981633974483, "fill": {"color": "rgba(232, 188, 112, 1)"}, "stroke": {"color": "rgba(230, 170, 45, 1)", "width": 2}}},
            "Near_Normal": {"image": {"type": "regular_shape", "points": 4, "radius": 10, "angle": 0.7853981633974483, "fill": {"color": "rgba(221, 221, 221, 1)"}, "stroke": {"color": "rgba(187, 187, 187, 1)", "width": 2}}},
            "Mildly_Wet": {"image": {"type": "regular_shape", "points": 4, "radius": 10, "angle": 0.7853981633974483, "fill": {"color": "rgba(113, 200, 105, 1)"}, "stroke": {"color": "rgba(0, 170, 0, 1)", "width": 2}}},
            "Moderately_Wet": {"image": {"type": "regular_shape", "points": 4, "radius": 10, "angle": 0.7853981633974483, "fill": {"color": "rgba(111, 135, 232, 1)"}, "stroke": {"color": "rgba(0, 40, 255, 1)", "width": 2}}},
            "Severely_Wet": {"image": {"type": "regular_shape", "points": 4, "radius": 10, "angle": 0.7853981633974483, "fill": {"color": "rgba(186, 121, 228, 1)"}, "stroke": {"color": "rgba(130, 0, 220, 1)", "width": 2}}}
        },
        "default": {"image": {"type": "regular_shape", "points": 4, "radius": 10, "angle": 0.7853981633974483, "fill": {"color": "rgba(110, 110, 110, 0)"}, "stroke": {"color": "rgba(0, 0, 0, 0)", "width": 2}}}
    },
    "CMOR Circle": {
        "property": "Category",
        "classes": {
            "SeverelyDry": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(115, 0, 0, 1)"}, "stroke": {"color": "rgba(255, 255, 255, 1)", "width": 1}}},
            "ModeratelyDry": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(215, 48, 39, 1)"}, "stroke": {"color": "rgba(255, 255, 255, 1)", "width": 1}}},
            "MildlyDry": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(252, 141, 89, 1)"}, "stroke": {"color": "rgba(255, 255, 255, 1)", "width": 1}}},
            "NearNormal": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(133, 133, 133, 1)"}, "stroke": {"color": "rgba(255, 255, 255, 1)", "width": 1}}},
            "MildlyWet": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(115, 223, 255, 1)"}, "stroke": {"color": "rgba(255, 255, 255, 1)", "width": 1}}},
            "ModeratelyWet": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(255, 255, 255, 1)"}, "stroke": {"color": "rgba(0, 0, 0, 1)", "width": 1}}},
            "SeverelyWet": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(0, 38, 115, 1)"}, "stroke": {"color": "rgba(255, 255, 255, 1)", "width": 1}}}
        },
        "default": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(255, 255, 0, 1)"}, "stroke": {"color": "rgba(0, 0, 0, 1)", "width": 1}}}
    },
    "CMOR Mt Circle": {
        "property": "Category",
        "classes": {
            "Severely_Dry": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(115, 0, 0, 1)"}, "stroke": {"color": "rgba(255, 255, 255, 1)", "width": 1}}},
            "Moderately_Dry": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(215, 48, 39, 1)"}, "stroke": {"color": "rgba(255, 255, 255, 1)", "width": 1}}},
            "Mildly_Dry": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(252, 141, 89, 1)"}, "stroke": {"color": "rgba(255, 255, 255, 1)", "width": 1}}},
            "Near_Normal": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(133, 133, 133, 1)"}, "stroke": {"color": "rgba(255, 255, 255, 1)", "width": 1}}},
            "Mildly_Wet": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(115, 223, 255, 1)"}, "stroke": {"color": "rgba(255, 255, 255, 1)", "width": 1}}},
            "Moderately_Wet": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(255, 255, 255, 1)"}, "stroke": {"color": "rgba(0, 0, 0, 1)", "width": 1}}},
            "Severely_Wet": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(0, 38, 115, 1)"}, "stroke": {"color": "rgba(255, 255, 255, 1)", "width": 1}}}
        },
        "default": {"image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(255, 255, 0, 1)"}, "stroke": {"color": "rgba(0, 0, 0, 1)", "width": 1}}}
    },
    "CMOR Highlight": {
        "image": {"type": "regular_shape", "points": 4, "radius": 10, "angle": 0.7853981633974483, "fill": {"color": "rgba(0, 255, 255, 1)"}, "stroke": {"color": "rgba(0, 245, 245, 1)", "width": 2}}
    },
    "CMOR Circle Highlight": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(0, 255, 255, 1)"}, "stroke": {"color": "rgba(0, 245, 245, 1)", "width": 1}}
    },
    "Precip Outlook Above 33": {
        "stroke": {"color": "rgba(192, 192, 192, 0)", "width": 1}, "fill": {"color": "rgba(150, 207, 128, 0)"}
    },
    "Precip Outlook Above 40": {
        "stroke": {"color": "rgba(192, 192, 192, 0)", "width": 1}, "fill": {"color": "rgba(179, 217, 171, 0)"}
    },
    "Precip Outlook Above 50": {
        "stroke": {"color": "rgba(192, 192, 192, 0)", "width": 1}, "fill": {"color": "rgba(72, 174, 56, 0)"}
    },
    "Precip Outlook Above 60": {
        "stroke": {"color": "rgba(192, 192, 192, 0)", "width": 1}, "fill": {"color": "rgba(57, 124, 94, 0)"}
    },
    "Precip Outlook Above 70": {
        "stroke": {"color": "rgba(192, 192, 192, 0)", "width": 1}, "fill": {"color": "rgba(0, 142, 64, 0)"}
    },
    "Precip Outlook Above 80": {
        "stroke": {"color": "rgba(192, 192, 192, 0)", "width": 1}, "fill": {"color": "rgba(40, 85, 61, 0)"}
    },
    "Precip Outlook Above 90": {
        "stroke": {"color": "rgba(192, 192, 192, 0)", "width": 1}, "fill": {"color": "rgba(40, 85, 23, 0)"}
    },
    "Precip Outlook Below 33": {
        "stroke": {"color": "rgba(192, 192, 192, 0)", "width": 1}, "fill": {"color": "rgba(240, 212, 147, 0)"}
    },
    "Precip Outlook Below 40": {
        "stroke": {"color": "rgba(192, 192, 192, 0)", "width": 1}, "fill": {"color": "rgba(215, 166, 76, 0)"}
    },
    "Precip Outlook Below 50": {
        "stroke": {"color": "rgba(192, 192, 192, 0)", "width": 1}, "fill": {"color": "rgba(186, 108, 50, 0)"}
    },
    "Precip Outlook Below 60": {
        "stroke": {"color": "rgba(192, 192, 192, 0)", "width": 1}, "fill": {"color": "rgba(155, 80, 49, 0)"}
    },
    "Precip Outlook Below 70": {
        "stroke": {"color": "rgba(192, 192, 192, 0)", "width": 1}, "fill": {"color": "rgba(147, 70, 57, 0)"}
    },
    "Precip Outlook Below 80": {
        "stroke": {"color": "rgba(192, 192, 192, 0)", "width": 1}, "fill": {"color": "rgba(128, 64, 0, 0)"}
    },
    "Precip Outlook Below 90": {
        "stroke": {"color": "rgba(192, 192, 192, 0)", "width": 1}, "fill": {"color": "rgba(80, 48, 48, 0)"}
    },
    "Precip Outlook EC 33": {
        "stroke": {"color": "rgba(192, 192, 192, 0)", "width": 1}, "fill": {"color": "rgba(175, 174, 175, 0)"}
    },
    "USDM Area Percent 0": {
        "stroke": {"color": "#aaaaaa", "width": 1}, "fill": {"color": "#ffffff"}
    },
    "USDM Area Percent 1": {
        "stroke": {"color": "#aaaaaa", "width": 1}, "fill": {"color": "#feebe2"}
    },
    "USDM Area Percent 2": {
        "stroke": {"color": "#aaaaaa", "width": 1}, "fill": {"color": "#fbb4b9"}
    },
    "USDM Area Percent 3": {
        "stroke": {"color": "#aaaaaa", "width": 1}, "fill": {"color": "#f768a1"}
    },
    "USDM Area Percent 4": {
        "stroke": {"color": "#aaaaaa", "width": 1}, "fill": {"color": "#c51b8a"}
    },
    "USDM Area Percent 5": {
        "stroke": {"color": "#aaaaaa", "width": 1}, "fill": {"color": "#7a0177"}
    },
    "DSCI 0": {
        "stroke": {"color": "#aaaaaa", "width": 1}, "fill": {"color": "#ffffff"}
    },
    "DSCI 1": {
        "stroke": {"color": "#aaaaaa", "width": 1}, "fill": {"color": "#ffffb2"}
    },
    "DSCI 2": {
        "stroke": {"color": "#aaaaaa", "width": 1}, "fill": {"color": "#fecc5c"}
    },
    "DSCI 3": {
        "stroke": {"color": "#aaaaaa", "width": 1}, "fill": {"color": "#fd8d3c"}
    },
    "DSCI 4": {
        "stroke": {"color": "#aaaaaa", "width": 1}, "fill": {"color": "#f03b20"}
    },
    "DSCI 5": {
        "stroke": {"color": "#aaaaaa", "width": 1}, "fill": {"color": "#bd0026"}
    },
    "SPI Point 0": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "#aaa"}, "stroke": {"color": "#393939", "width": 1}}
    },
    "SPI Point 1": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "#820000"}, "stroke": {"color": "#393939", "width": 1}}
    },
    "SPI Point 2": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "#BE0000"}, "stroke": {"color": "#393939", "width": 1}}
    },
    "SPI Point 3": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "#FA0000"}, "stroke": {"color": "#393939", "width": 1}}
    },
    "SPI Point 4": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "#FA8228"}, "stroke": {"color": "#393939", "width": 1}}
    },
    "SPI Point 5": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "#E6AF2D"}, "stroke": {"color": "#393939", "width": 1}}
    },
    "SPI Point 6": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "#FFFFFF"}, "stroke": {"color": "#393939", "width": 1}}
    },
    "SPI Point 7": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "#00AA00"}, "stroke": {"color": "#393939", "width": 1}}
    },
    "SPI Point 8": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "#0028FF"}, "stroke": {"color": "#393939", "width": 1}}
    },
    "SPI Point 9": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "#8200DC"}, "stroke": {"color": "#393939", "width": 1}}
    },
    "SPI Point 10": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "#A000C8"}, "stroke": {"color": "#393939", "width": 1}}
    },
    "SPI Point 11": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "#FA00FA"}, "stroke": {"color": "#393939", "width": 1}}
    },
    "Station CoCoRaHS": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "#00FF00"}, "stroke": {"color": "#228B22", "width": 1}}
    },
    "Station ACIS": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "#FF0000"}, "stroke": {"color": "#B22222", "width": 1}}
    },
    "Station HCDN": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "#0000FF"}, "stroke": {"color": "#00008B", "width": 1}}
    },
    "Station RAWS": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "#FFFF00"}, "stroke": {"color": "#DAA520", "width": 1}}
    },
    "Station SCAN": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "#FF00FF"}, "stroke": {"color": "#4B0082", "width": 1}}
    },
    "Point Highlight": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(0, 255, 255, 1)"}, "stroke": {"color": "rgba(0, 245, 245, 1)", "width": 1}}
    },
    "Point Highlight Alt": {
        "image": {"type": "circle", "radius": 7, "fill": {"color": "rgba(192, 192, 192, 1)"}, "stroke": {"color": "rgba(128, 128, 128, 1)", "width": 1}}
    },
    "DRA Climate": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(0, 255, 0, 1)"}, "stroke": {"color": "rgba(0, 0, 0, 1)", "width": 1}}
    },
    "DRA Hydro": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(0, 0, 255, 1)"}, "stroke": {"color": "rgba(0, 0, 0, 1)", "width": 1}}
    },
    "VDA Photo": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(255, 0, 0, 1)"}, "stroke": {"color": "rgba(0, 0, 0, 1)", "width": 1}}
    },
    "Circle": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "rgba(110, 110, 110, 0)"}, "stroke": {"color": "rgba(0, 0, 0, 0)", "width": 1}}
    },
    "Circle FF0000": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "#FF0000"}, "stroke": {"color": "rgba(0, 0, 0, 1)", "width": 1}}
    },
    "Circle 00FF00": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "#00FF00"}, "stroke": {"color": "rgba(0, 0, 0, 1)", "width": 1}}
    },
    "Circle 0000FF": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "#0000FF"}, "stroke": {"color": "rgba(0, 0, 0, 1)", "width": 1}}
    },
    "Circle FF00FF": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "#FF00FF"}, "stroke": {"color": "rgba(0, 0, 0, 1)", "width": 1}}
    },
    "Circle 00FFFF": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "#00FFFF"}, "stroke": {"color": "rgba(0, 0, 0, 1)", "width": 1}}
    },
    "Circle FFFF00": {
        "image": {"type": "circle", "radius": 5, "fill": {"color": "#FFFF00"}, "stroke": {"color": "rgba(0, 0, 0, 1)", "width": 1}}
    }
}
"##;
