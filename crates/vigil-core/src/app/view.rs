impl<CH, RD> WatchfaceApp<CH, RD>
where
    CH: OutboundChannel,
    RD: Renderer,
{
    pub fn new(channel: CH, renderer: RD) -> Self {
        let mut app = Self {
            channel,
            renderer,
            store: ContentStore::new(),
            nav: NavState::Automatic,
            timer_generation: 0,
            pending_timer: None,
            current_date: None,
        };
        app.push_defaults();
        app
    }

    fn push_defaults(&mut self) {
        self.renderer.set_text(TextField::Time, PLACEHOLDER_TIME);
        self.renderer.set_text(TextField::AmPmUpper, "");
        self.renderer.set_text(TextField::AmPmLower, "");
        self.renderer.set_text(TextField::DateLine, "");
        self.push_scripture_body();
        self.push_scripture_reference();
        self.push_page_indicator();
    }

    fn push_time(&mut self, wall: &WallClock) {
        let time = clock::format_time(wall);
        self.renderer.set_text(TextField::Time, time.as_str());

        let (upper, lower) = clock::ampm_glyphs(wall);
        self.renderer.set_text(TextField::AmPmUpper, upper);
        self.renderer.set_text(TextField::AmPmLower, lower);
    }

    fn push_date_line(&mut self) {
        // Before the first tick there is no date to compose against.
        let Some(date) = self.current_date else {
            return;
        };

        let line = clock::format_date_line(&date, self.store.temperature());
        self.renderer.set_text(TextField::DateLine, line.as_str());
    }

    fn push_scripture_body(&mut self) {
        self.renderer
            .set_text(TextField::ScriptureBody, self.store.scripture_text());
    }

    fn push_scripture_reference(&mut self) {
        self.renderer
            .set_text(TextField::ScriptureRef, self.store.scripture_reference());
    }

    fn push_page_indicator(&mut self) {
        let page = self.store.scripture_page();
        let mut text = String::<PAGE_TEXT_BYTES>::new();
        let _ = write!(text, "{}/{}", page.current, page.total);
        self.renderer
            .set_text(TextField::PageIndicator, text.as_str());
    }

    /// Current navigation mode.
    pub fn nav_state(&self) -> NavState {
        self.nav
    }

    /// Drain the staged one-shot timer request. The platform schedules
    /// it and calls [`Self::handle_timer_expiry`] with its generation.
    pub fn take_timer_request(&mut self) -> Option<TimerRequest> {
        self.pending_timer.take()
    }

    /// Latest-known content, read-only.
    pub fn content(&self) -> &ContentStore {
        &self.store
    }

    pub fn renderer(&self) -> &RD {
        &self.renderer
    }

    pub fn channel(&self) -> &CH {
        &self.channel
    }
}
