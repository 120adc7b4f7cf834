//! Glue between a [`DateRangeResolver`] and the wheel control that displays it.

use std::fmt;

use log::debug;

use crate::{CalendarDate, DateFormat, DateRangeResolver, Rows, Wheel, WheelError, WheelSource};

/// The three-wheel control a [`DatePicker`] drives.
///
/// Rendering, scrolling physics and row labels belong to the implementation; the
/// picker only positions wheels and asks for a redisplay.
pub trait SelectorWidget {
    /// Moves `wheel` to `row` without reporting it back as a user selection.
    fn scroll_to_row(&mut self, wheel: Wheel, row: usize);

    /// Redisplays every wheel. Row counts and values are read from `source`.
    fn reload(&mut self, source: &dyn WheelSource);
}

type SelectionListener = Box<dyn FnMut(CalendarDate)>;

/// Owns a resolver and its widget, and keeps the two in step.
pub struct DatePicker<W> {
    resolver: DateRangeResolver,
    widget:   W,
    format:   DateFormat,
    listener: Option<SelectionListener>,
}

impl<W: SelectorWidget> DatePicker<W> {
    /// Wraps `widget` and positions it on the resolver's current selection.
    pub fn new(resolver: DateRangeResolver, widget: W) -> Self {
        let mut picker = Self {
            resolver,
            widget,
            format: DateFormat::default(),
            listener: None,
        };
        let rows = picker.resolver.rows();
        picker.show(rows);
        picker
    }

    /// Sets the layout used by [`DatePicker::set_date_str`].
    #[must_use]
    pub fn with_format(mut self, format: DateFormat) -> Self {
        self.format = format;
        self
    }

    /// Registers the callback run after the user settles a wheel, replacing any
    /// previous one.
    pub fn on_select(&mut self, listener: impl FnMut(CalendarDate) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub const fn resolver(&self) -> &DateRangeResolver {
        &self.resolver
    }

    pub const fn widget(&self) -> &W {
        &self.widget
    }

    pub const fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    pub const fn format(&self) -> DateFormat {
        self.format
    }

    pub const fn selected(&self) -> CalendarDate {
        self.resolver.selected()
    }

    /// Selects `date` and moves every wheel onto it.
    ///
    /// Returns `false`, leaving the widget untouched, when the resolver rejects the date.
    pub fn set_date(&mut self, date: CalendarDate) -> bool {
        let Some(rows) = self.resolver.set_date(date) else {
            return false;
        };
        self.show(rows);
        true
    }

    /// Parses `text` with the picker's [`DateFormat`] and selects it.
    pub fn set_date_str(&mut self, text: &str) -> bool {
        let Some(rows) = self.resolver.set_date_str(text, self.format) else {
            return false;
        };
        self.show(rows);
        true
    }

    /// Handles the user settling `wheel` on `row`.
    ///
    /// Wheels to the right of a changed year or month are repositioned on the
    /// re-validated selection before the widget is reloaded and the listener runs.
    ///
    /// # Errors
    /// Returns `WheelError::RowOutOfRange` if `row` is outside the rows the widget was
    /// last given; nothing changes in that case.
    pub fn wheel_settled(&mut self, wheel: Wheel, row: usize) -> Result<(), WheelError> {
        if let Some(day_row) = self.resolver.selection_changed(wheel, row)? {
            if wheel == Wheel::Year {
                let month_row = self.resolver.rows().month;
                self.widget.scroll_to_row(Wheel::Month, month_row);
            }
            self.widget.scroll_to_row(Wheel::Day, day_row);
        }
        self.widget.reload(&self.resolver);

        let selected = self.resolver.selected();
        debug!("{wheel} settled on row {row}, selected {selected}");
        if let Some(listener) = self.listener.as_mut() {
            listener(selected);
        }
        Ok(())
    }

    /// Like [`DatePicker::wheel_settled`], for widgets that number wheels by component.
    ///
    /// # Errors
    /// Returns `WheelError::UnknownComponent` for an index that names no wheel, and the
    /// errors of `wheel_settled` otherwise.
    pub fn component_settled(&mut self, component: usize, row: usize) -> Result<(), WheelError> {
        self.wheel_settled(Wheel::try_from(component)?, row)
    }

    fn show(&mut self, rows: Rows) {
        for (wheel, row) in rows.iter() {
            self.widget.scroll_to_row(wheel, row);
        }
        self.widget.reload(&self.resolver);
    }
}

impl<W: fmt::Debug> fmt::Debug for DatePicker<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatePicker")
            .field("resolver", &self.resolver)
            .field("widget", &self.widget)
            .field("format", &self.format)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}
